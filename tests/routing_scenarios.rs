//! Dispatcher-level behavior of complete route tables.

use std::sync::{Arc, Mutex};

use segment_router::app::demo_router;
use segment_router::routing::{CompiledRoute, ParameterSet, RouterObserver};
use segment_router::{RequestContext, Response, RouteError, Router};

/// Handler that reports which route ran and what it captured.
fn tagged(tag: &'static str) -> impl Fn(&RequestContext) -> Response + Send + Sync + 'static {
    move |ctx: &RequestContext| {
        let mut pairs: Vec<_> = ctx
            .params()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        pairs.sort();
        Response::text(format!("{tag}|{}", pairs.join("&")))
    }
}

#[test]
fn test_home_route_has_no_params() {
    let mut router = Router::new();
    router.get("/", tagged("H1")).unwrap();

    let response = router.into_dispatcher().handle("GET", "/");
    assert_eq!(response.status, 200);
    assert_eq!(response.body.to_text(), "H1|");
}

#[test]
fn test_demo_scenarios() {
    let dispatcher = demo_router().unwrap().into_dispatcher();

    assert_eq!(dispatcher.handle("GET", "/").body.to_text(), "You are at Home!");
    assert_eq!(dispatcher.handle("GET", "/greet/Ada").body.to_text(), "Hello, Ada!");
    assert_eq!(
        dispatcher.handle("GET", "/users/123/posts/456").body.to_text(),
        "You are viewing post 456 of user 123!"
    );
    assert_eq!(
        dispatcher.handle("GET", "/x/y").body.to_text(),
        "Wildcard path: x/y"
    );

    let response = dispatcher.handle("POST", "/greet/Ada");
    assert_eq!(response.status, 404);
    assert!(response.body.to_text().contains("/greet/Ada"));
}

#[test]
fn test_substituted_params_round_trip() {
    let mut router = Router::new();
    router
        .get("/users/:user_id/posts/:post_id", tagged("posts"))
        .unwrap()
        .post("/orgs/:org/repos/:repo/issues/:number", tagged("issues"))
        .unwrap();
    let dispatcher = router.into_dispatcher();

    let values = ["123", "Ada", "a.b", "with space", "%2F", "(x)+", "ünïcode", "-"];
    for a in values {
        for b in values {
            let response = dispatcher.handle("GET", &format!("/users/{a}/posts/{b}"));
            let mut expected = vec![format!("post_id={b}"), format!("user_id={a}")];
            expected.sort();
            assert_eq!(response.body.to_text(), format!("posts|{}", expected.join("&")));
        }
    }

    let response = dispatcher.handle("POST", "/orgs/rust/repos/std/issues/42");
    let ctx_text = response.body.to_text();
    assert!(ctx_text.starts_with("issues|"));
    assert!(ctx_text.contains("org=rust"));
    assert!(ctx_text.contains("repo=std"));
    assert!(ctx_text.contains("number=42"));
}

#[test]
fn test_earlier_registration_wins() {
    let mut router = Router::new();
    router
        .get("/a/:x", tagged("first"))
        .unwrap()
        .get("/a/b", tagged("second"))
        .unwrap()
        .get("/*", tagged("third"))
        .unwrap();
    let dispatcher = router.into_dispatcher();

    assert_eq!(dispatcher.handle("GET", "/a/b").body.to_text(), "first|x=b");
    assert_eq!(dispatcher.handle("GET", "/a/b/c").body.to_text(), "third|=a/b/c");

    // Reversed order flips the winner.
    let mut router = Router::new();
    router
        .get("/*", tagged("third"))
        .unwrap()
        .get("/a/:x", tagged("first"))
        .unwrap();
    assert_eq!(router.into_dispatcher().handle("GET", "/a/b").body.to_text(), "third|=a/b");
}

#[test]
fn test_wildcard_catches_everything() {
    let mut router = Router::new();
    router.get("/*", tagged("all")).unwrap();
    let dispatcher = router.into_dispatcher();

    assert_eq!(dispatcher.handle("GET", "/").body.to_text(), "all|=");
    assert_eq!(dispatcher.handle("GET", "/a").body.to_text(), "all|=a");
    assert_eq!(dispatcher.handle("GET", "/a/b/c").body.to_text(), "all|=a/b/c");
}

#[test]
fn test_slash_variants_match_identically() {
    let mut router = Router::new();
    router.get("/a/:b", tagged("ab")).unwrap();
    let dispatcher = router.into_dispatcher();

    for path in ["/a/b", "/a/b/", "//a//b"] {
        assert_eq!(dispatcher.handle("GET", path).body.to_text(), "ab|b=b", "path {path}");
    }
}

#[test]
fn test_unmatched_requests_are_404() {
    let dispatcher = demo_router().unwrap().into_dispatcher();
    let empty = Router::new().into_dispatcher();

    for (method, path) in [("PUT", "/"), ("DELETE", "/greet/x"), ("get", "/"), ("", "/")] {
        let response = dispatcher.handle(method, path);
        assert_eq!(response.status, 404, "{method} {path}");
        assert!(response.body.to_text().contains(path));
    }

    let response = empty.handle("GET", "/");
    assert_eq!(response.status, 404);
    assert_eq!(response.body.to_text(), "No route matches /");
}

#[test]
fn test_misplaced_wildcard_fails_registration() {
    let mut router = Router::new();
    let err = router.get("/files/*/raw", tagged("bad")).unwrap_err();
    assert_eq!(
        err,
        RouteError::WildcardNotLast {
            template: "/files/*/raw".into(),
            position: 1,
        }
    );
}

#[derive(Debug, Default)]
struct EventLog(Mutex<Vec<String>>);

impl RouterObserver for EventLog {
    fn route_registered(&self, route: &CompiledRoute) {
        self.0.lock().unwrap().push(format!("registered {}", route.template()));
    }

    fn match_succeeded(&self, route: &CompiledRoute, params: &ParameterSet) {
        self.0
            .lock()
            .unwrap()
            .push(format!("matched {} ({} params)", route.template(), params.len()));
    }

    fn match_failed(&self, method: &str, path: &str) {
        self.0.lock().unwrap().push(format!("failed {method} {path}"));
    }
}

#[test]
fn test_observer_extension_points() {
    let log = Arc::new(EventLog::default());
    let mut router = Router::with_observer(log.clone());
    router.get("/greet/:name", tagged("greet")).unwrap();
    let dispatcher = router.into_dispatcher();

    dispatcher.handle("GET", "/greet/Ada");
    dispatcher.handle("GET", "/nowhere");

    assert_eq!(
        *log.0.lock().unwrap(),
        vec![
            "registered /greet/:name",
            "matched /greet/:name (1 params)",
            "failed GET /nowhere",
        ]
    );
}
