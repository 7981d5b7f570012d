use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::cst;
use crate::loc::SourcePosition;

/// An inline `... on Type { ... }` selection.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub position: SourcePosition,
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl InlineFragment {
    pub(crate) fn from_cst(cst_inline: &cst::InlineFragment) -> Self {
        Self {
            position: SourcePosition::from_pos(cst_inline.position),
            type_condition:
                cst_inline.type_condition.as_ref().map(|type_condition| {
                    let cst::TypeCondition::On(type_name) = type_condition;
                    type_name.clone()
                }),
            directives:
                cst_inline.directives.iter()
                    .map(Directive::from_cst)
                    .collect(),
            selection_set: SelectionSet::from_cst(&cst_inline.selection_set),
        }
    }
}
