use crate::resolver::ServiceScope;
use std::any::Any;
use std::any::TypeId;
use std::sync::Arc;

/// The consumed surface of a dependency-injection container.
///
/// The container implementation lives outside this crate; only service
/// lookup and child-scope creation are used here. A request-level provider
/// is read-only shared state and must tolerate reads from arbitrarily many
/// concurrent field resolutions.
pub trait ServiceProvider: Send + Sync {
    /// Look up the service instance registered for `service_type`.
    fn get_service(
        &self,
        service_type: TypeId,
    ) -> Option<Arc<dyn Any + Send + Sync>>;

    /// Derive a child scope whose services live exactly as long as the
    /// scope itself.
    fn create_scope(&self) -> Box<dyn ServiceScope>;
}

impl dyn ServiceProvider {
    /// Typed convenience over [`ServiceProvider::get_service`].
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.get_service(TypeId::of::<T>())
            .and_then(|service| service.downcast::<T>().ok())
    }
}
