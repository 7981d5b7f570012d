//! Field-resolution abstractions consumed by the execution engine.
//!
//! The engine walks a built [`Document`](crate::ast::Document) and invokes
//! one [`FieldResolver`] per field, handing each a [`ResolveFieldContext`].
//! The service-provider traits describe the one slice of a
//! dependency-injection container this pipeline consumes: service lookup and
//! child-scope creation.

mod cancellation_token;
mod field_resolver;
mod path_segment;
mod resolve_field_context;
mod service_provider;
mod service_scope;

pub use cancellation_token::CancellationToken;
pub use field_resolver::BoxError;
pub use field_resolver::FieldResolver;
pub use field_resolver::ResolveResult;
pub use field_resolver::ResolvedValue;
pub use path_segment::PathSegment;
pub use resolve_field_context::ResolveFieldContext;
pub use service_provider::ServiceProvider;
pub use service_scope::ServiceScope;

#[cfg(test)]
mod tests;
