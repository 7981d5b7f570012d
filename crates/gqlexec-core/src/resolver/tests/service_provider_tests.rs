use crate::resolver::ServiceProvider;
use crate::resolver::ServiceScope;
use std::any::Any;
use std::any::TypeId;
use std::sync::Arc;

#[derive(Debug, Eq, PartialEq)]
struct GreeterService {
    greeting: String,
}

#[derive(Debug)]
struct UnregisteredService;

struct SingleServiceProvider {
    greeter: Arc<GreeterService>,
}
impl ServiceProvider for SingleServiceProvider {
    fn get_service(
        &self,
        service_type: TypeId,
    ) -> Option<Arc<dyn Any + Send + Sync>> {
        (service_type == TypeId::of::<GreeterService>())
            .then(|| Arc::clone(&self.greeter) as Arc<dyn Any + Send + Sync>)
    }

    fn create_scope(&self) -> Box<dyn ServiceScope> {
        unimplemented!("not exercised by these tests")
    }
}

fn setup_provider() -> Arc<dyn ServiceProvider> {
    Arc::new(SingleServiceProvider {
        greeter: Arc::new(GreeterService {
            greeting: "hello".to_string(),
        }),
    })
}

#[test]
fn typed_get_downcasts_a_registered_service() {
    let provider = setup_provider();
    let greeter = provider.get::<GreeterService>()
        .expect("expected the greeter to be registered");
    assert_eq!(greeter.greeting, "hello");
}

#[test]
fn typed_get_returns_none_for_unregistered_services() {
    let provider = setup_provider();
    assert!(provider.get::<UnregisteredService>().is_none());
}
