//! Request-scoped service isolation for field resolvers.
//!
//! [`ScopedFieldResolver`] wraps any
//! [`FieldResolver`](gqlexec_core::resolver::FieldResolver) so that each
//! field resolution runs against its own child service scope, derived from
//! the request-level provider and released on every exit path: normal
//! return, inner-resolver failure, or cancellation.

mod missing_request_services_error;
mod scoped_field_resolver;
mod scoped_resolve_context;

pub use missing_request_services_error::MissingRequestServicesError;
pub use scoped_field_resolver::ScopedFieldResolver;
pub use scoped_resolve_context::ScopedResolveContext;

#[cfg(test)]
mod tests;
