//! Mock backend tests for ApiClient
//!
//! These tests use wiremock to simulate the todo backend, whose errors follow
//! the `{"detail": ...}` shape.

use api_fetch::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Todo {
    id: u64,
    title: String,
}

#[derive(Serialize)]
struct NewTodo<'a> {
    title: &'a str,
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::builder().base_url(server.uri()).build()).unwrap()
}

fn client_with_session(server: &MockServer, raw: &str) -> ApiClient {
    let store = MemorySessionStore::new();
    store.set_item("auth_session", raw);
    ApiClient::builder()
        .config(ClientConfig::builder().base_url(server.uri()).build())
        .session_store(store)
        .build()
        .unwrap()
}

async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn get_empty_list_without_session() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server).get::<Vec<Todo>>("/todos", None).await;

    assert_eq!(resp.data, Some(vec![]));
    assert_eq!(resp.error, None);
    let request = only_request(&mock_server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn post_creates_todo() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({"title": "x"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "title": "x"})))
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server)
        .post::<Todo, _>("/todos", Some(&NewTodo { title: "x" }), None)
        .await;

    assert_eq!(
        resp,
        ApiResponse::success(Todo {
            id: 1,
            title: "x".into()
        })
    );
}

#[tokio::test]
async fn not_found_uses_detail() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server).get::<Todo>("/todos/99", None).await;

    assert_eq!(resp.data, None);
    assert_eq!(resp.error.as_deref(), Some("not found"));
}

#[tokio::test]
async fn server_error_with_html_body_uses_status_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw("<html>Internal Server Error</html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server).get::<Vec<Todo>>("/todos", None).await;

    assert_eq!(resp.data, None);
    assert_eq!(resp.error.as_deref(), Some("HTTP 500: Internal Server Error"));
}

#[tokio::test]
async fn every_error_status_yields_non_empty_message() {
    let mock_server = MockServer::start().await;
    for status in [400u16, 401, 403, 409, 422, 429, 502, 503] {
        Mock::given(method("GET"))
            .and(path(format!("/status/{status}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    for status in [400u16, 401, 403, 409, 422, 429, 502, 503] {
        let resp = client.get::<Value>(&format!("/status/{status}"), None).await;
        assert_eq!(resp.data, None);
        let error = resp.error.expect("error message");
        assert!(error.starts_with(&format!("HTTP {status}")), "{error}");
    }
}

#[tokio::test]
async fn session_token_is_sent_as_bearer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(header("Authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = client_with_session(&mock_server, r#"{"token":"abc"}"#)
        .get::<Vec<Todo>>("/todos", None)
        .await;

    assert!(resp.is_ok());
}

#[tokio::test]
async fn malformed_session_is_sent_without_auth() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let resp = client_with_session(&mock_server, "{token: abc")
        .get::<Vec<Todo>>("/todos", None)
        .await;

    assert_eq!(resp.data, Some(vec![]));
    let request = only_request(&mock_server).await;
    assert!(request.headers.get("authorization").is_none());
}

#[tokio::test]
async fn non_json_success_has_no_data() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("ok", "text/plain"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(
        client.delete::<Value>("/todos/1", None).await,
        ApiResponse::empty()
    );
    assert_eq!(client.get::<Value>("/health", None).await, ApiResponse::empty());
}

#[tokio::test]
async fn mismatched_json_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "one"})))
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server).get::<Todo>("/todos/1", None).await;

    assert_eq!(resp.data, None);
    assert!(!resp.error.unwrap().is_empty());
}

#[tokio::test]
async fn body_verbs_without_body_send_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/1/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "x"})))
        .mount(&mock_server)
        .await;

    let resp = client_for(&mock_server)
        .put::<Todo, ()>("/todos/1/complete", None, None)
        .await;

    assert!(resp.data.is_some());
    let request = only_request(&mock_server).await;
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn patch_overrides_method_and_keeps_caller_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/todos/1"))
        .and(header("X-Client", "tests"))
        .and(body_json(json!({"title": "y"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "y"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new()
        .with_method(Method::GET)
        .with_header("X-Client", "tests");
    let resp = client_for(&mock_server)
        .patch::<Todo, _>("/todos/1", Some(&json!({"title": "y"})), Some(options))
        .await;

    assert_eq!(resp.data.map(|t| t.title), Some("y".to_string()));
}

#[tokio::test]
async fn transport_failure_is_reported() {
    // Reserve a port, then close it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(
        ClientConfig::builder()
            .base_url(format!("http://{addr}"))
            .build(),
    )
    .unwrap();
    let resp = client.get::<Value>("/todos", None).await;

    assert_eq!(resp.data, None);
    assert!(!resp.error.unwrap().is_empty());
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl HttpInterceptor for Recorder {
    fn on_before_send(
        &self,
        ctx: &api_fetch::RequestContext,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, FetchError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("send {} {}", ctx.method, ctx.url));
        Ok(builder)
    }

    fn on_error(&self, _ctx: &api_fetch::RequestContext, error: &FetchError) {
        self.events.lock().unwrap().push(format!("error {error}"));
    }
}

#[tokio::test]
async fn interceptors_observe_failures() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&mock_server)
        .await;

    let recorder = Arc::new(Recorder::default());
    let client = ApiClient::builder()
        .config(ClientConfig::builder().base_url(mock_server.uri()).build())
        .with_http_interceptor(recorder.clone())
        .with_http_interceptor(Arc::new(LoggingInterceptor))
        .build()
        .unwrap();

    let resp = client.get::<Todo>("/todos/99", None).await;
    assert_eq!(resp.error.as_deref(), Some("not found"));

    let events = recorder.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            format!("send GET {}/todos/99", mock_server.uri()),
            "error not found".to_string(),
        ]
    );
}

struct Refuse;

impl HttpInterceptor for Refuse {
    fn on_before_send(
        &self,
        _ctx: &api_fetch::RequestContext,
        _builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, FetchError> {
        Err(FetchError::Interceptor("offline mode".into()))
    }
}

#[tokio::test]
async fn interceptor_can_short_circuit() {
    let mock_server = MockServer::start().await;

    let client = ApiClient::builder()
        .config(ClientConfig::builder().base_url(mock_server.uri()).build())
        .with_http_interceptor(Arc::new(Refuse))
        .build()
        .unwrap();

    let resp = client.get::<Value>("/todos", None).await;
    assert_eq!(resp, ApiResponse::failure("offline mode"));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_session_store_supplies_token() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("auth_session.json"),
        r#"{"token":"from-disk","user":{"email":"a@b.c"}}"#,
    )
    .unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(header("Authorization", "Bearer from-disk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 2, "title": "z"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .config(ClientConfig::builder().base_url(mock_server.uri()).build())
        .session_store(FileSessionStore::new(dir.path()))
        .build()
        .unwrap();

    let resp = client.get::<Vec<Todo>>("/todos", None).await;
    assert_eq!(
        resp.data,
        Some(vec![Todo {
            id: 2,
            title: "z".into()
        }])
    );
}

#[tokio::test]
async fn invalid_caller_header_fails_without_sending() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().with_header("Authorization", "Bearer bad\nvalue");
    let resp = client_with_session(&mock_server, r#"{"token":"stored"}"#)
        .get::<Vec<Todo>>("/todos", Some(options))
        .await;

    assert_eq!(resp.data, None);
    let error = resp.error.expect("error message");
    assert!(error.contains("Authorization"), "{error}");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_keeps_caller_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos"))
        .and(body_json(json!({"ids": [1, 2]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = RequestOptions::new().with_body(json!({"ids": [1, 2]}).to_string());
    let resp = client_for(&mock_server)
        .delete::<Value>("/todos", Some(options))
        .await;

    assert_eq!(resp, ApiResponse::empty());
}
