//! Local HTTP server that records every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

/// One request as seen by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct CaptureState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
}

/// Handle to a running capture server
pub struct CaptureServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CaptureServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL with trailing slash, usable as an ntfy server
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

async fn capture(
    State(state): State<CaptureState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let request = CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
    };
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(request);
    state.status
}

/// Spawns a capture server on a random local port answering every
/// request with `status`
pub async fn spawn_capture_server(status: StatusCode) -> CaptureServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = CaptureState {
        requests: Arc::clone(&requests),
        status,
    };
    let app = Router::new().fallback(capture).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind capture server");
    let addr = listener.local_addr().expect("capture server address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    CaptureServer { addr, requests }
}
