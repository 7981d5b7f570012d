//! Type aliases for the concrete syntax tree produced by the external
//! `graphql_parser` crate.
//!
//! Everything this crate consumes from the grammar parser funnels through
//! this module. No `graphql_parser` type appears in a public API outside of
//! it, and the parser's error type never crosses the
//! [`DocumentBuilder`](crate::DocumentBuilder) boundary.

pub use graphql_parser::Pos;
pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type Mutation = graphql_parser::query::Mutation<'static, String>;
pub type Number = graphql_parser::query::Number;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Query = graphql_parser::query::Query<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Subscription = graphql_parser::query::Subscription<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Parse executable-document text into its concrete syntax tree.
///
/// The underlying parse entry point is a stateless, reentrant function; any
/// number of callers may parse concurrently.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    graphql_parser::query::parse_query::<String>(text)
        .map(|document| document.into_static())
}
