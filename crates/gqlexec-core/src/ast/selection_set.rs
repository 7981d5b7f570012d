use crate::ast::Selection;
use crate::cst;
use crate::loc::SourcePosition;

/// An ordered set of selections between one pair of braces.
///
/// Leaf fields carry an empty selection set rather than an absent one,
/// matching the shape the grammar produces.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub span: (SourcePosition, SourcePosition),
    pub items: Vec<Selection>,
}
impl SelectionSet {
    pub(crate) fn from_cst(cst_selection_set: &cst::SelectionSet) -> Self {
        Self {
            span: (
                SourcePosition::from_pos(cst_selection_set.span.0),
                SourcePosition::from_pos(cst_selection_set.span.1),
            ),
            items:
                cst_selection_set.items.iter()
                    .map(Selection::from_cst)
                    .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
