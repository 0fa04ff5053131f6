//! Mock advice origin for gateway tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A canned response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn slip(id: u64, advice: &str) -> Self {
        Self {
            status: 200,
            body: format!(r#"{{"slip": {{"id": {id}, "advice": "{advice}"}}}}"#),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Default)]
struct OriginState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// In-process origin serving `GET /advice` with queued canned responses.
pub struct MockOrigin {
    addr: SocketAddr,
    state: OriginState,
}

impl MockOrigin {
    /// Start the origin on an ephemeral port.
    pub async fn start() -> Self {
        let state = OriginState::default();
        let router = Router::new()
            .route("/advice", get(serve_advice))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock origin");
        let addr = listener.local_addr().expect("mock origin addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock origin serve");
        });

        Self { addr, state }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/advice", self.addr)
    }

    pub async fn push_response(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().await.clone()
    }
}

async fn serve_advice(State(state): State<OriginState>, headers: HeaderMap) -> impl IntoResponse {
    state.captured.lock().await.push(CapturedRequest {
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or("").to_string(),
                )
            })
            .collect(),
    });

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::slip(1, "Have a default."));

    (
        StatusCode::from_u16(response.status).expect("mock status"),
        [("content-type", "application/json")],
        response.body,
    )
}
