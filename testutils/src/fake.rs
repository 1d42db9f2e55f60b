use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use serde_json::{
    Value,
    json,
};

type Handler = Box<dyn Fn(When, Then)>;

// A fake Kubernetes apiserver: register handlers, call `build()` to install them, then point a
// kube::Client at it.  Anything that no handler matches falls through to a catch-all that prints
// the request and returns a 404.
pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<Handler>,
    mock_ids: Vec<usize>,
}

fn log_request(req: &HttpMockRequest) -> bool {
    println!("    fake apiserver got: {} {}", req.method(), req.uri().path());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder { server: MockServer::start(), handlers: vec![], mock_ids: vec![] }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |when, then| f(when.matches(log_request), then)));
        self
    }

    pub fn handle_get(&mut self, path: String, obj: Value) -> &mut Self {
        self.handle(move |when, then| {
            when.method(GET).path(&path);
            then.json_body(obj.clone());
        })
    }

    pub fn handle_not_found(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(404).json_body(status_not_found());
        })
    }

    // Expects a status patch on `path` whose body matches every regex in `body_patterns`, and
    // answers with `obj`
    pub fn handle_status_patch(&mut self, path: String, body_patterns: &[&str], obj: Value) -> &mut Self {
        let patterns: Vec<String> = body_patterns.iter().map(|p| p.to_string()).collect();
        self.handle(move |when, then| {
            patterns
                .iter()
                .fold(when.method(PATCH).path(format!("{path}/status")), |w, p| w.body_matches(p.as_str()));
            then.json_body(obj.clone());
        })
    }

    pub fn build(&mut self) {
        for handler in &self.handlers {
            self.mock_ids.push(self.server.mock(handler).id);
        }
        self.server.mock(|when, then| {
            when.matches(log_request);
            then.status(404).json_body(status_not_found());
        });
    }

    // Every registered handler must have been hit at least once
    pub fn assert(&self) {
        for id in &self.mock_ids {
            Mock::new(*id, &self.server).assert();
        }
    }
}

impl Default for MockServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let uri: http::Uri = builder.server.url("/").parse().unwrap();
    let client = kube::Client::try_from(kube::Config::new(uri)).unwrap();
    (builder, client)
}

pub fn status_not_found() -> Value {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "reason": "NotFound",
        "code": 404,
    })
}

// Path of a namespaced coralogix.com object on the fake apiserver
pub fn cx_object_path(version: &str, plural: &str, ns: &str, name: &str) -> String {
    format!("/apis/coralogix.com/{version}/namespaces/{ns}/{plural}/{name}")
}
