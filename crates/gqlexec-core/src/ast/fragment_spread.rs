use crate::ast::Directive;
use crate::cst;
use crate::loc::SourcePosition;

/// A `...FragmentName` selection referencing a named fragment definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub position: SourcePosition,
    pub fragment_name: String,
    pub directives: Vec<Directive>,
}
impl FragmentSpread {
    pub(crate) fn from_cst(cst_spread: &cst::FragmentSpread) -> Self {
        Self {
            position: SourcePosition::from_pos(cst_spread.position),
            fragment_name: cst_spread.fragment_name.clone(),
            directives:
                cst_spread.directives.iter()
                    .map(Directive::from_cst)
                    .collect(),
        }
    }
}
