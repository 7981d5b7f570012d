use crate::cst;
use crate::loc::SourcePosition;

/// A user-facing syntax error produced when query text fails to parse.
///
/// Always derived from the external parser's grammar-level error; that error
/// type itself never crosses this boundary. Syntax errors are recoverable by
/// the caller (typically reported back to the client as a locatable error
/// entry in the query response).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Syntax error at {position}: {message}")]
pub struct SyntaxError {
    message: String,
    position: SourcePosition,
}
impl SyntaxError {
    /// Human-readable description of what the parser rejected.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location the parser reported for the failure.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Translate the parser's grammar-level error.
    ///
    /// `graphql_parser` renders its errors as
    /// `query parse error: Parse error at <line>:<column>` followed by
    /// detail lines, and exposes nothing more structured than that
    /// rendering. The location is recovered from the first line; `1:1` when
    /// none is present.
    pub(crate) fn from_parse_error(parse_error: &cst::ParseError) -> Self {
        let rendered = parse_error.to_string();

        let position = extract_position(&rendered)
            .unwrap_or_else(|| SourcePosition::new(1, 1));

        let detail_lines: Vec<&str> =
            rendered.lines()
                .skip(1)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
        let message =
            if detail_lines.is_empty() {
                rendered.trim().to_string()
            } else {
                detail_lines.join("; ")
            };

        Self { message, position }
    }
}

/// Scan the first rendered line for an `at <line>:<column>` marker.
fn extract_position(rendered: &str) -> Option<SourcePosition> {
    let first_line = rendered.lines().next()?;
    let (_, after_at) = first_line.rsplit_once(" at ")?;
    let (line_str, rest) = after_at.split_once(':')?;
    let column_str: String =
        rest.chars()
            .take_while(|ch| ch.is_ascii_digit())
            .collect();

    let line = line_str.trim().parse().ok()?;
    let column = column_str.parse().ok()?;
    Some(SourcePosition::new(line, column))
}
