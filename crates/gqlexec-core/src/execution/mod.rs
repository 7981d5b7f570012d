mod document_builder;
mod syntax_error;

pub use document_builder::DocumentBuilder;
pub use syntax_error::SyntaxError;

#[cfg(test)]
mod tests;
