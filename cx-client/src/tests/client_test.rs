use assertables::*;
use httpmock::prelude::*;
use serde_json::json;
use tracing_test::traced_test;

use super::*;

const TEST_API_KEY: &str = "cxtp_secret";
const TEST_PATH: &str = "mgmt/openapi/latest/widgets/v1";

#[fixture]
fn server() -> MockServer {
    MockServer::start()
}

fn client_for(server: &MockServer) -> CoralogixClient {
    let url = url::Url::parse(&server.base_url()).unwrap();
    CoralogixClient::new(url, TEST_API_KEY).unwrap()
}

#[rstest]
fn test_new_appends_trailing_slash() {
    let client = CoralogixClient::new(url::Url::parse("https://api.example.com/prefix").unwrap(), "k").unwrap();
    assert_eq!(client.base_url().as_str(), "https://api.example.com/prefix/");
}

#[rstest]
#[tokio::test]
#[traced_test]
async fn test_create_sends_bearer_token(server: MockServer) {
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/{TEST_PATH}"))
            .header("authorization", format!("Bearer {TEST_API_KEY}"))
            .json_body(json!({"name": "foo"}));
        then.status(200).json_body(json!({"widget": {"id": "abc"}}));
    });

    let client = client_for(&server);
    let resp = client.create(TEST_PATH, &json!({"name": "foo"})).await.unwrap();

    mock.assert();
    assert_eq!(resp, json!({"widget": {"id": "abc"}}));
}

#[rstest]
#[tokio::test]
async fn test_get_not_found(server: MockServer) {
    let mock = server.mock(|when, then| {
        when.method(GET).path(format!("/{TEST_PATH}/missing"));
        then.status(404);
    });

    let client = client_for(&server);
    let resp = client.get(TEST_PATH, "missing").await.unwrap();

    mock.assert();
    assert_none!(resp);
}

#[rstest]
#[tokio::test]
async fn test_get_escapes_id(server: MockServer) {
    let mock = server.mock(|when, then| {
        when.method(GET).path(format!("/{TEST_PATH}/a%20b"));
        then.status(200).json_body(json!({"id": "a b"}));
    });

    let client = client_for(&server);
    let resp = client.get(TEST_PATH, "a b").await.unwrap();

    mock.assert();
    assert_some_eq_x!(resp.clone(), json!({"id": "a b"}));
}

#[rstest]
#[tokio::test]
async fn test_update_api_error(server: MockServer) {
    let mock = server.mock(|when, then| {
        when.method(PUT).path(format!("/{TEST_PATH}/abc"));
        then.status(400).body("bad threshold");
    });

    let client = client_for(&server);
    let err = client.update(TEST_PATH, "abc", &json!({})).await.unwrap_err();

    mock.assert();
    assert!(matches!(
        err.downcast_ref::<CoralogixError>(),
        Some(CoralogixError::Api { status: 400, message }) if message == "bad threshold"
    ));
}

#[rstest]
#[tokio::test]
#[case::unauthorized(401)]
#[case::forbidden(403)]
async fn test_unauthorized(server: MockServer, #[case] status: u16) {
    server.mock(|when, then| {
        when.method(GET).path(format!("/{TEST_PATH}"));
        then.status(status);
    });

    let client = client_for(&server);
    let err = client.list(TEST_PATH).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<CoralogixError>(), Some(CoralogixError::Unauthorized(s)) if *s == status));
}

#[rstest]
#[tokio::test]
async fn test_delete_not_found(server: MockServer) {
    server.mock(|when, then| {
        when.method(DELETE).path(format!("/{TEST_PATH}/abc"));
        then.status(404);
    });

    let client = client_for(&server);
    let err = client.delete(TEST_PATH, "abc").await.unwrap_err();
    assert!(CoralogixError::is_not_found(&err));
}

#[rstest]
#[tokio::test]
async fn test_replace_and_clear_empty_body(server: MockServer) {
    let put = server.mock(|when, then| {
        when.method(PUT).path(format!("/{TEST_PATH}"));
        then.status(200);
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path(format!("/{TEST_PATH}"));
        then.status(204);
    });

    let client = client_for(&server);
    let resp = client.replace(TEST_PATH, &json!({"policies": []})).await.unwrap();
    client.clear(TEST_PATH).await.unwrap();

    put.assert();
    delete.assert();
    assert_eq!(resp, serde_json::Value::Null);
}
