use crate::resolver::ResolveFieldContext;

/// The value produced by resolving one field.
pub type ResolvedValue = serde_json::Value;

/// Error channel shared by every resolver.
///
/// A boxed error keeps the concrete error type intact end to end: wrappers
/// such as `gqlexec-di`'s scoped resolver move the same box through
/// unchanged, so callers can still `downcast_ref` to the original type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type ResolveResult = Result<ResolvedValue, BoxError>;

/// A unit that computes the value of one field given a context.
///
/// Resolution may suspend, and the runtime may execute many resolutions
/// concurrently within one request, each with its own context. A failed
/// resolution fails that field alone; unrelated fields keep resolving.
#[async_trait::async_trait]
pub trait FieldResolver: Send + Sync {
    async fn resolve(&self, context: &dyn ResolveFieldContext) -> ResolveResult;
}
