//! Tests for the echo loader over an in-memory namespace

use routewalk::dispatcher::{DispatchError, Dispatcher, HandlerLoader, RequestSource};
use routewalk::echo::EchoLoader;
use routewalk::namespace::StaticNamespace;
use routewalk::resolver::HandlerLocation;

struct Plain(&'static str);

impl RequestSource for Plain {
    fn route(&self) -> String {
        self.0.to_string()
    }
}

fn sample_namespace() -> StaticNamespace {
    StaticNamespace::builder()
        .handler("index")
        .handler_at(&["admin"], "members")
        .build()
}

#[test]
fn test_echo_loader_mirrors_namespace() {
    let loader = EchoLoader::new(sample_namespace());
    let present = HandlerLocation {
        namespace: vec!["admin".to_string()],
        handler: "members".to_string(),
    };
    let absent = HandlerLocation {
        namespace: vec![],
        handler: "members".to_string(),
    };
    assert!(loader.contains(&present));
    assert!(!loader.contains(&absent));
}

#[test]
fn test_dispatch_with_echo_handlers() {
    let ns = sample_namespace();
    let dispatcher = Dispatcher::new(Box::new(EchoLoader::new(sample_namespace())));
    dispatcher.dispatch(&Plain("admin/members/edit/7"), &ns).unwrap();
    // Unmatched route falls back to the root `index` handler, which the
    // echo loader also serves.
    dispatcher.dispatch(&Plain("whatever"), &ns).unwrap();
}

#[test]
fn test_dispatch_without_index_handler_is_not_found() {
    let ns = StaticNamespace::builder().handler_at(&["admin"], "members").build();
    let dispatcher = Dispatcher::new(Box::new(EchoLoader::new(
        StaticNamespace::builder().handler_at(&["admin"], "members").build(),
    )));
    let err = dispatcher.dispatch(&Plain("missing"), &ns).unwrap_err();
    assert!(matches!(err, DispatchError::NotFound));
}
