use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::cst;

/// A fully built executable document, ready for execution.
///
/// Produced by [`DocumentBuilder`](crate::DocumentBuilder). The node tree is
/// a strict structural transform of the concrete syntax tree, and
/// `original_text` carries the exact input string for later diagnostics and
/// introspection.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub original_text: String,
}
impl Document {
    pub(crate) fn from_cst(
        original_text: &str,
        cst_document: &cst::Document,
    ) -> Self {
        Self {
            definitions:
                cst_document.definitions.iter()
                    .map(Definition::from_cst)
                    .collect(),
            original_text: original_text.to_string(),
        }
    }

    /// All operation definitions, in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op_def) => Some(op_def),
            Definition::Fragment(_) => None,
        })
    }

    /// All fragment definitions, in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(_) => None,
            Definition::Fragment(frag_def) => Some(frag_def),
        })
    }
}
