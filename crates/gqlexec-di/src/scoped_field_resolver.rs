use crate::MissingRequestServicesError;
use crate::ScopedResolveContext;
use gqlexec_core::resolver::FieldResolver;
use gqlexec_core::resolver::ResolveFieldContext;
use gqlexec_core::resolver::ResolveResult;
use std::sync::Arc;

/// Wraps a field resolver so that each resolution runs inside its own child
/// service scope.
///
/// Resolvers that need request-scoped services (a unit of work, a
/// transaction-bound data accessor) must not share one request-wide instance
/// across concurrently resolving sibling fields: that instance may not
/// tolerate concurrent use, or may accumulate state the siblings should not
/// see. Each invocation here derives a fresh scope from the request-level
/// provider, hands the inner resolver a read-through context exposing the
/// scoped provider, and releases the scope once the resolution finishes on
/// any path.
///
/// No state is shared across invocations; concurrent resolutions against
/// the same request-level provider each own a distinct scope.
pub struct ScopedFieldResolver {
    inner: Arc<dyn FieldResolver>,
}
impl ScopedFieldResolver {
    /// Wrap `inner` so it resolves against per-invocation service scopes.
    pub fn new(inner: Arc<dyn FieldResolver>) -> Self {
        Self { inner }
    }
}
#[async_trait::async_trait]
impl FieldResolver for ScopedFieldResolver {
    async fn resolve(&self, context: &dyn ResolveFieldContext) -> ResolveResult {
        let request_services = match context.request_services() {
            Some(request_services) => request_services,
            None => return Err(Box::new(MissingRequestServicesError)),
        };

        // The scope is owned by this invocation alone. Dropping it releases
        // it, so every exit path below -- including this future being
        // dropped mid-await -- closes the scope before the caller observes
        // an outcome.
        let scope = request_services.create_scope();
        log::trace!(
            "Opened a service scope to resolve field `{}`.",
            context.field_name(),
        );

        let scoped_context = ScopedResolveContext::new(context, scope.provider());
        let result = self.inner.resolve(&scoped_context).await;

        drop(scoped_context);
        drop(scope);
        log::trace!(
            "Released the service scope for field `{}`.",
            context.field_name(),
        );

        result
    }
}
