//! Test doubles for observing scope lifecycles and context read-through.

use gqlexec_core::resolver::CancellationToken;
use gqlexec_core::resolver::FieldResolver;
use gqlexec_core::resolver::PathSegment;
use gqlexec_core::resolver::ResolveFieldContext;
use gqlexec_core::resolver::ResolveResult;
use gqlexec_core::resolver::ResolvedValue;
use gqlexec_core::resolver::ServiceProvider;
use gqlexec_core::resolver::ServiceScope;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Scope lifecycle counts accumulated across one test.
#[derive(Debug, Default)]
pub struct ScopeCounters {
    pub created: AtomicUsize,
    pub released: AtomicUsize,
}

/// Request-level provider double. Registers no services of its own, so any
/// service observed by an inner resolver must have come from a scoped
/// provider.
pub struct CountingServiceProvider {
    pub counters: Arc<ScopeCounters>,
}
impl ServiceProvider for CountingServiceProvider {
    fn get_service(
        &self,
        _service_type: TypeId,
    ) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }

    fn create_scope(&self) -> Box<dyn ServiceScope> {
        let scope_id = self.counters.created.fetch_add(1, Ordering::SeqCst);
        Box::new(CountingScope {
            counters: Arc::clone(&self.counters),
            provider: Arc::new(ScopedProvider { scope_id }),
        })
    }
}

/// Service resolvable only out of a scoped provider; identifies the scope
/// that served it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScopeId(pub usize);

pub struct ScopedProvider {
    scope_id: usize,
}
impl ServiceProvider for ScopedProvider {
    fn get_service(
        &self,
        service_type: TypeId,
    ) -> Option<Arc<dyn Any + Send + Sync>> {
        (service_type == TypeId::of::<ScopeId>())
            .then(|| Arc::new(ScopeId(self.scope_id)) as Arc<dyn Any + Send + Sync>)
    }

    fn create_scope(&self) -> Box<dyn ServiceScope> {
        unimplemented!("scoped providers do not nest in these tests")
    }
}

pub struct CountingScope {
    counters: Arc<ScopeCounters>,
    provider: Arc<ScopedProvider>,
}
impl ServiceScope for CountingScope {
    fn provider(&self) -> Arc<dyn ServiceProvider> {
        Arc::clone(&self.provider) as Arc<dyn ServiceProvider>
    }
}
impl Drop for CountingScope {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Context double with fixed field state.
pub struct TestContext {
    pub arguments: IndexMap<String, ResolvedValue>,
    pub cancellation_token: CancellationToken,
    pub field_name: String,
    pub parent_value: Option<ResolvedValue>,
    pub path: Vec<PathSegment>,
    pub request_services: Option<Arc<dyn ServiceProvider>>,
}
impl TestContext {
    pub fn new(request_services: Option<Arc<dyn ServiceProvider>>) -> Self {
        Self {
            arguments: IndexMap::from([(
                "id".to_string(),
                serde_json::json!("2001"),
            )]),
            cancellation_token: CancellationToken::new(),
            field_name: "hero".to_string(),
            parent_value: Some(serde_json::json!({ "episode": "JEDI" })),
            path: vec![PathSegment::Field("hero".to_string())],
            request_services,
        }
    }
}
impl ResolveFieldContext for TestContext {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn arguments(&self) -> &IndexMap<String, ResolvedValue> {
        &self.arguments
    }

    fn parent_value(&self) -> Option<&ResolvedValue> {
        self.parent_value.as_ref()
    }

    fn path(&self) -> &[PathSegment] {
        &self.path
    }

    fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    fn request_services(&self) -> Option<Arc<dyn ServiceProvider>> {
        self.request_services.as_ref().map(Arc::clone)
    }
}

/// Everything an inner resolver saw through its (possibly adapted) context.
pub struct Observation {
    pub arguments: IndexMap<String, ResolvedValue>,
    pub cancellation_token: CancellationToken,
    pub field_name: String,
    pub parent_value: Option<ResolvedValue>,
    pub path: Vec<PathSegment>,
    pub scope_id: Option<ScopeId>,
}

/// Inner resolver that records what it observes and succeeds with `"ok"`.
#[derive(Default)]
pub struct ProbeResolver {
    pub calls: AtomicUsize,
    pub observations: Mutex<Vec<Observation>>,
}
#[async_trait::async_trait]
impl FieldResolver for ProbeResolver {
    async fn resolve(&self, context: &dyn ResolveFieldContext) -> ResolveResult {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scope_id =
            context.request_services()
                .and_then(|services| services.get::<ScopeId>())
                .map(|scope_id| *scope_id);
        self.observations.lock().unwrap().push(Observation {
            arguments: context.arguments().clone(),
            cancellation_token: context.cancellation_token().clone(),
            field_name: context.field_name().to_string(),
            parent_value: context.parent_value().cloned(),
            path: context.path().to_vec(),
            scope_id,
        });

        Ok(serde_json::json!("ok"))
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("inner resolver failed: {0}")]
pub struct TestResolverError(pub &'static str);

/// Inner resolver that always fails with a [`TestResolverError`].
pub struct FailingResolver;
#[async_trait::async_trait]
impl FieldResolver for FailingResolver {
    async fn resolve(&self, _context: &dyn ResolveFieldContext) -> ResolveResult {
        Err(Box::new(TestResolverError("boom")))
    }
}

/// Inner resolver that suspends forever, for cancellation tests.
pub struct NeverResolver;
#[async_trait::async_trait]
impl FieldResolver for NeverResolver {
    async fn resolve(&self, _context: &dyn ResolveFieldContext) -> ResolveResult {
        std::future::pending::<()>().await;
        unreachable!("a pending future completed");
    }
}
