use crate::cst;

/// A 1-based line/column location within the original query text.
///
/// Very similar to `graphql_parser::Pos`, re-expressed here so that no
/// parser-level type appears in this crate's public API.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
}
impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub(crate) fn from_pos(pos: cst::Pos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }

    /// 1-based line number within the document.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number within the line.
    pub fn column(&self) -> usize {
        self.column
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
