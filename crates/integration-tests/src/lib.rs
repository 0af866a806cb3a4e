//! Integration tests for the Recommend client.
//!
//! Tests run the real [`FormActions`] and [`ApiClient`] against
//! [`StubBackend`], an in-process HTTP server on `127.0.0.1:0` that records
//! every request and answers with canned responses. No database or external
//! service is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p recommend-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `account_actions` - register, login, logout, profile and password
//! - `board_card_actions` - boards, cards and the edit-then-save flow
//! - `api_reads` - typed read endpoints

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use recommend_client::dom::RecordingBrowser;
use recommend_client::{ApiClient, ClientConfig, FormActions};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Error type of the setup helpers.
pub type SetupError = Box<dyn std::error::Error + Send + Sync>;

/// A request as the stub backend received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// The body parsed as JSON, if it is JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// The body parsed as `application/x-www-form-urlencoded` pairs.
    #[must_use]
    pub fn form(&self) -> Vec<(String, String)> {
        url_decode_pairs(&self.body)
    }

    /// `true` when the content type starts with `mime`.
    #[must_use]
    pub fn is(&self, mime: &str) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.starts_with(mime))
    }
}

/// A canned answer.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: u16,
    body: String,
    content_type: &'static str,
    set_cookie: Option<String>,
}

impl StubResponse {
    /// JSON answer with `status`.
    #[must_use]
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
            set_cookie: None,
        }
    }

    /// Plain-text answer with `status`, e.g. an HTML error page stand-in.
    #[must_use]
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "text/plain",
            set_cookie: None,
        }
    }

    /// Same answer, also setting a cookie.
    #[must_use]
    pub fn with_cookie(mut self, cookie: &str) -> Self {
        self.set_cookie = Some(cookie.to_string());
        self
    }
}

impl Default for StubResponse {
    fn default() -> Self {
        Self::json(200, &serde_json::json!({}))
    }
}

#[derive(Default)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<HashMap<(String, String), StubResponse>>,
}

/// In-process stand-in for the Recommend backend.
///
/// Every route answers `200 {}` unless [`respond`](Self::respond) says
/// otherwise. The server stops when the value is dropped.
pub struct StubBackend {
    addr: SocketAddr,
    state: Arc<StubState>,
    task: JoinHandle<()>,
}

impl StubBackend {
    /// Bind to an ephemeral port and start serving.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot be bound.
    pub async fn start() -> Result<Self, SetupError> {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .fallback(record_and_answer)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, state, task })
    }

    /// `http://127.0.0.1:<port>`
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `method path` with `response` from now on.
    pub fn respond(&self, method: &str, path: &str, response: StubResponse) {
        self.state
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method.to_ascii_uppercase(), path.to_string()), response);
    }

    /// Everything received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Client configuration pointing at this backend.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse.
    pub fn config(&self) -> Result<ClientConfig, SetupError> {
        Ok(ClientConfig::new(&self.base_url())?)
    }

    /// API client pointing at this backend.
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be built.
    pub fn client(&self) -> Result<ApiClient, SetupError> {
        Ok(ApiClient::new(&self.config()?)?)
    }

    /// Form actions over a fresh client and a [`RecordingBrowser`].
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be built.
    pub fn actions(&self) -> Result<FormActions<RecordingBrowser>, SetupError> {
        Ok(FormActions::new(self.client()?, RecordingBrowser::new()))
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn record_and_answer(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let request = RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: header(CONTENT_TYPE),
        cookie: header(COOKIE),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let key = (request.method.clone(), request.path.clone());
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(request);

    let canned = state
        .responses
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned()
        .unwrap_or_default();

    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response_headers = HeaderMap::new();
    response_headers.insert(CONTENT_TYPE, HeaderValue::from_static(canned.content_type));
    if let Some(cookie) = canned
        .set_cookie
        .as_deref()
        .and_then(|cookie| HeaderValue::from_str(cookie).ok())
    {
        response_headers.insert(SET_COOKIE, cookie);
    }

    (status, response_headers, canned.body).into_response()
}

/// Decode `a=1&b=2` pairs.
fn url_decode_pairs(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}
