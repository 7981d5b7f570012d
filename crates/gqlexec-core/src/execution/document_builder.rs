use crate::ast;
use crate::cst;
use crate::execution::SyntaxError;

/// Builds executable documents from raw query text.
///
/// Tokenization and grammar-tree construction are done by the external
/// parser (see [`cst`](crate::cst)); this type owns the conversion of the
/// concrete syntax tree into the execution-ready [`ast::Document`], plus
/// error translation at that boundary. Building performs no I/O and keeps no
/// state between calls: the parse entry point is a stateless, reentrant
/// function, so one `DocumentBuilder` may be shared across any number of
/// concurrent `build` calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBuilder;

impl DocumentBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a typed [`ast::Document`] from executable-document text.
    ///
    /// Malformed input always yields a [`SyntaxError`]; a document is never
    /// partially built. On success the returned document carries `text`
    /// byte-for-byte in [`original_text`](ast::Document#structfield.original_text).
    ///
    /// # Panics
    ///
    /// Panics if the parser hands back a tree node this crate has no mapping
    /// for. That is a contract mismatch between the grammar version and this
    /// crate -- a build defect -- never a property of user input.
    pub fn build(&self, text: &str) -> Result<ast::Document, SyntaxError> {
        let cst_document = match cst::parse(text) {
            Ok(cst_document) => cst_document,
            Err(parse_error) => {
                let syntax_error = SyntaxError::from_parse_error(&parse_error);
                log::debug!("Rejected executable document: {syntax_error}");
                return Err(syntax_error);
            },
        };

        Ok(ast::Document::from_cst(text, &cst_document))
    }
}
