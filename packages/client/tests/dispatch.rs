//! Executor contract: assembly, customizer application, status gating.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use http::{HeaderValue, Method, StatusCode};

use stagecoach_client::{
    normalize_path, BoxError, Client, Error, RequestData, Transport, TransportRequest,
    TransportResponse,
};

#[derive(Clone)]
struct RecordingTransport {
    status: StatusCode,
    seen: Arc<Mutex<Vec<TransportRequest>>>,
}

impl RecordingTransport {
    fn answering(status: StatusCode) -> Self {
        Self {
            status,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn last_request(&self) -> TransportRequest {
        self.seen
            .lock()
            .unwrap()
            .pop()
            .expect("transport was never called")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    fn send(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        self.seen.lock().unwrap().push(request);
        Ok(TransportResponse::new(self.status, ""))
    }

    async fn send_async(&self, request: TransportRequest) -> Result<TransportResponse, BoxError> {
        self.send(request)
    }
}

fn described(operation: &str, method: Method, path: &str) -> RequestData {
    let mut data = RequestData::new();
    data.set_operation(operation);
    data.set_method_and_path(method, normalize_path(path));
    data.push_expected(StatusCode::OK);
    data
}

#[test]
fn dispatch_joins_the_default_base() {
    let transport = RecordingTransport::answering(StatusCode::OK);
    let client = Client::new(transport.clone()).with_base_path("/api/");

    assert_eq!(client.base_path(), "/api");
    client
        .dispatch(described("ListUsers", Method::GET, "users"))
        .unwrap();

    let seen = transport.last_request();
    assert_eq!(seen.method, Method::GET);
    assert_eq!(seen.path, "/api/users");
}

#[test]
fn dispatch_honors_the_override_and_the_empty_override() {
    let transport = RecordingTransport::answering(StatusCode::OK);
    let client = Client::new(transport.clone()).with_base_path("api");

    let mut data = described("ListUsers", Method::GET, "users");
    data.set_base_path("/v2".to_owned());
    client.dispatch(data).unwrap();
    assert_eq!(transport.last_request().path, "/v2/users");

    let mut data = described("ListUsers", Method::GET, "users");
    data.set_base_path(String::new());
    client.dispatch(data).unwrap();
    assert_eq!(transport.last_request().path, "/users");
}

#[test]
fn customizer_runs_once_before_send() {
    let transport = RecordingTransport::answering(StatusCode::OK);
    let client = Client::new(transport.clone());
    let calls = Arc::new(Mutex::new(0_u32));

    let mut data = described("CreateUser", Method::POST, "users");
    let counter = Arc::clone(&calls);
    data.set_customizer(Box::new(move |outgoing| {
        *counter.lock().unwrap() += 1;
        outgoing.header(
            http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer token"),
        );
    }));
    client.dispatch(data).unwrap();

    assert_eq!(*calls.lock().unwrap(), 1);
    let seen = transport.last_request();
    assert_eq!(
        seen.headers.get(http::header::AUTHORIZATION).unwrap(),
        "Bearer token"
    );
}

#[test]
fn unexpected_status_is_rejected_with_context() {
    let client = Client::new(RecordingTransport::answering(StatusCode::BAD_GATEWAY));

    let err = client
        .dispatch(described("ListUsers", Method::GET, "users"))
        .unwrap_err();

    match err {
        Error::UnexpectedStatus {
            operation,
            status,
            expected,
        } => {
            assert_eq!(operation, "ListUsers");
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(expected, vec![StatusCode::OK]);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[test]
fn transport_failures_are_wrapped_with_the_operation() {
    struct Down;

    #[async_trait]
    impl Transport for Down {
        fn send(&self, _request: TransportRequest) -> Result<TransportResponse, BoxError> {
            Err("socket closed".into())
        }

        async fn send_async(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, BoxError> {
            self.send(request)
        }
    }

    let client = Client::new(Down);
    let err = client
        .dispatch(described("ListUsers", Method::GET, "users"))
        .unwrap_err();

    assert!(matches!(err, Error::Transport { ref operation, .. } if operation == "ListUsers"));
}

#[tokio::test]
async fn async_dispatch_shares_the_contract() {
    let transport = RecordingTransport::answering(StatusCode::OK);
    let client = Client::new(transport.clone()).with_base_path("api");

    client
        .dispatch_async(described("ListUsers", Method::GET, "/users/"))
        .await
        .unwrap();
    assert_eq!(transport.last_request().path, "/api/users");

    let gone = Client::new(RecordingTransport::answering(StatusCode::GONE));
    let err = gone
        .dispatch_async(described("ListUsers", Method::GET, "users"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { .. }));
}
