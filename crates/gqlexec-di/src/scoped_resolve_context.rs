use gqlexec_core::resolver::CancellationToken;
use gqlexec_core::resolver::PathSegment;
use gqlexec_core::resolver::ResolveFieldContext;
use gqlexec_core::resolver::ResolvedValue;
use gqlexec_core::resolver::ServiceProvider;
use indexmap::IndexMap;
use std::sync::Arc;

/// Read-through view of a field-resolution context that substitutes a
/// scoped service provider for the request-level one.
///
/// Every accessor other than
/// [`request_services`](ResolveFieldContext::request_services) delegates to
/// the wrapped context. Nothing is copied or snapshotted; several of those
/// fields are mutable or lazily computed by the original context, and a copy
/// would go stale.
pub struct ScopedResolveContext<'ctx> {
    inner: &'ctx dyn ResolveFieldContext,
    scoped_services: Arc<dyn ServiceProvider>,
}
impl<'ctx> ScopedResolveContext<'ctx> {
    pub fn new(
        inner: &'ctx dyn ResolveFieldContext,
        scoped_services: Arc<dyn ServiceProvider>,
    ) -> Self {
        Self {
            inner,
            scoped_services,
        }
    }
}
impl ResolveFieldContext for ScopedResolveContext<'_> {
    fn field_name(&self) -> &str {
        self.inner.field_name()
    }

    fn arguments(&self) -> &IndexMap<String, ResolvedValue> {
        self.inner.arguments()
    }

    fn parent_value(&self) -> Option<&ResolvedValue> {
        self.inner.parent_value()
    }

    fn path(&self) -> &[PathSegment] {
        self.inner.path()
    }

    fn cancellation_token(&self) -> &CancellationToken {
        self.inner.cancellation_token()
    }

    fn request_services(&self) -> Option<Arc<dyn ServiceProvider>> {
        Some(Arc::clone(&self.scoped_services))
    }
}
