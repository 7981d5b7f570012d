use crate::ast::Argument;
use crate::cst;
use crate::loc::SourcePosition;

/// A directive annotation attached to a definition or selection.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub position: SourcePosition,
    pub name: String,
    pub arguments: Vec<Argument>,
}
impl Directive {
    pub(crate) fn from_cst(cst_directive: &cst::Directive) -> Self {
        Self {
            position: SourcePosition::from_pos(cst_directive.position),
            name: cst_directive.name.clone(),
            arguments:
                cst_directive.arguments.iter()
                    .map(|(name, value)| Argument::from_cst(name, value))
                    .collect(),
        }
    }
}
