use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::cst;
use crate::loc::SourcePosition;

/// A field selection, possibly aliased, with arguments and sub-selections.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub position: SourcePosition,
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl Field {
    pub(crate) fn from_cst(cst_field: &cst::Field) -> Self {
        Self {
            position: SourcePosition::from_pos(cst_field.position),
            alias: cst_field.alias.clone(),
            name: cst_field.name.clone(),
            arguments:
                cst_field.arguments.iter()
                    .map(|(name, value)| Argument::from_cst(name, value))
                    .collect(),
            directives:
                cst_field.directives.iter()
                    .map(Directive::from_cst)
                    .collect(),
            selection_set: SelectionSet::from_cst(&cst_field.selection_set),
        }
    }

    /// If an alias was specified for this field, return the alias. Otherwise
    /// return the name of the field.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}
