use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::cst;

/// A single entry in a selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub(crate) fn from_cst(cst_selection: &cst::Selection) -> Self {
        match cst_selection {
            cst::Selection::Field(field) =>
                Selection::Field(Field::from_cst(field)),

            cst::Selection::FragmentSpread(spread) =>
                Selection::FragmentSpread(FragmentSpread::from_cst(spread)),

            cst::Selection::InlineFragment(inline) =>
                Selection::InlineFragment(InlineFragment::from_cst(inline)),
        }
    }
}
