use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;

use b12_submit::config::Config;

/// A request as observed by the receiving endpoint.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub signature: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct EndpointState {
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    respond_status: u16,
    respond_body: String,
    delay: Option<Duration>,
}

/// A local receiver standing in for the application endpoint.
pub struct TestEndpoint {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl TestEndpoint {
    pub fn url(&self) -> String {
        format!("http://{}/apply/submission", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn record_submission(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    state.received.lock().unwrap().push(ReceivedRequest {
        content_type: header("content-type"),
        signature: header("x-signature-256"),
        body,
    });

    (
        StatusCode::from_u16(state.respond_status).unwrap(),
        state.respond_body.clone(),
    )
}

/// Spawn a receiver that answers every POST with `status` and `receipt_body`.
pub async fn spawn_endpoint(status: u16, receipt_body: &str) -> TestEndpoint {
    spawn_with(status, receipt_body, None).await
}

/// Spawn a receiver that sleeps before answering, for timeout tests.
pub async fn spawn_slow_endpoint(status: u16, delay: Duration) -> TestEndpoint {
    spawn_with(status, "", Some(delay)).await
}

async fn spawn_with(status: u16, receipt_body: &str, delay: Option<Duration>) -> TestEndpoint {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        received: received.clone(),
        respond_status: status,
        respond_body: receipt_body.to_string(),
        delay,
    };

    let app = Router::new()
        .route("/apply/submission", post(record_submission))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestEndpoint { addr, received }
}

/// A fully populated config pointed at the given endpoint URL.
pub fn config_for(endpoint: &str) -> Config {
    Config {
        secret: "s3cr3t".to_string(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        resume_link: "https://x/r.pdf".to_string(),
        repository_link: "https://x/repo".to_string(),
        action_run_link: "https://x/run/1".to_string(),
        endpoint: endpoint.to_string(),
    }
}
