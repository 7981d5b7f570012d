use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::cst;

/// A top-level definition within an executable document.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}
impl Definition {
    pub(crate) fn from_cst(cst_definition: &cst::Definition) -> Self {
        match cst_definition {
            cst::Definition::Operation(op_def) =>
                Definition::Operation(OperationDefinition::from_cst(op_def)),

            cst::Definition::Fragment(frag_def) =>
                Definition::Fragment(FragmentDefinition::from_cst(frag_def)),
        }
    }
}
