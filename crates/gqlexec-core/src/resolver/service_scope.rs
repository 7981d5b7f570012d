use crate::resolver::ServiceProvider;
use std::sync::Arc;

/// A bounded-lifetime container of request-scoped service instances,
/// derived from a longer-lived provider.
///
/// Dropping the scope releases every service instance created within it;
/// there is no separate release call. Release is infallible at this
/// boundary and runs on every exit path of the owning resolution, including
/// cancellation. An implementation whose cleanup can fail must handle that
/// failure itself (log it, poison a pool slot) rather than panic in `Drop`.
pub trait ServiceScope: Send {
    /// Provider that resolves services out of this scope.
    fn provider(&self) -> Arc<dyn ServiceProvider>;
}
