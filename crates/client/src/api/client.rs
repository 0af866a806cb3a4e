//! Recommend backend HTTP client.
//!
//! One method per endpoint. Mutating calls only care about the status code;
//! read calls decode the JSON body into the `recommend-core` models.

use std::sync::Arc;

use recommend_core::{
    Board, BoardId, BoardPayload, Card, CardId, CardUpdate, NewCard, NewUser, PasswordUpdate,
    Token, UserId, UserNameUpdate, UserWithBoards,
};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::routes::ApiRoute;

use super::error::{ApiError, error_message};

/// Name of the cookie the backend reads the session token from.
pub const SESSION_COOKIE: &str = "access_token";

/// Recommend API client.
///
/// Cheap to clone; clones share the connection pool and the cookie jar, so a
/// session created through one clone is visible to all of them.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    cookies: Arc<Jar>,
    base_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Request body variants the backend accepts.
enum Body<'a, T: Serialize + ?Sized> {
    Json(&'a T),
    Form(&'a T),
    Empty,
}

impl ApiClient {
    /// Create a new client for the configured backend.
    ///
    /// No request timeout is set.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());
        if let Some(token) = &config.access_token {
            jar.add_cookie_str(
                &format!("{SESSION_COOKIE}={}; Path=/", token.expose_secret()),
                &config.base_url,
            );
        }

        let mut builder = reqwest::Client::builder().cookie_provider(Arc::clone(&jar));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                cookies: jar,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Session token currently held in the cookie jar.
    ///
    /// Set by a successful [`login`](Self::login) or taken from the
    /// configured access token.
    #[must_use]
    pub fn session_token(&self) -> Option<SecretString> {
        let header = self.inner.cookies.cookies(&self.inner.base_url)?;
        let prefix = format!("{SESSION_COOKIE}=");
        header
            .to_str()
            .ok()?
            .split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .filter(|token| !token.is_empty())
            .map(|token| SecretString::from(token.to_string()))
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Register a new account (`POST /users`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, user), fields(user_name = %user.user_name))]
    pub async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        self.send(Method::POST, ApiRoute::Users, Body::Json(user))
            .await
            .map(drop)
    }

    /// Change a user's first and last name (`PUT /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, update), fields(user_id = %user_id))]
    pub async fn update_user_name(
        &self,
        user_id: &UserId,
        update: &UserNameUpdate,
    ) -> Result<(), ApiError> {
        self.send(Method::PUT, ApiRoute::User(user_id), Body::Json(update))
            .await
            .map(drop)
    }

    /// Change a user's password (`PUT /users/{id}`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, update), fields(user_id = %user_id))]
    pub async fn update_password(
        &self,
        user_id: &UserId,
        update: &PasswordUpdate,
    ) -> Result<(), ApiError> {
        self.send(Method::PUT, ApiRoute::User(user_id), Body::Json(update))
            .await
            .map(drop)
    }

    /// Fetch a user and their public boards.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// body is not a user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_user(&self, user_id: &UserId) -> Result<UserWithBoards, ApiError> {
        let response = self
            .send_with_query(ApiRoute::User(user_id), &[("show_page", "false")])
            .await?;
        read_json(response).await
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in with raw form fields (`POST /session/`, form-urlencoded).
    ///
    /// The backend expects `username` and `password`; every pair given is
    /// forwarded unchanged. On success the session cookie is kept in the
    /// client's cookie jar.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects the
    /// credentials, or the body is not a token.
    #[instrument(skip(self, form), fields(field_count = form.len()))]
    pub async fn login(&self, form: &[(String, String)]) -> Result<Token, ApiError> {
        let response = self
            .send(Method::POST, ApiRoute::Session, Body::Form(form))
            .await?;
        read_json(response).await
    }

    /// Log out (`DELETE /session/`, no body).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, ApiRoute::Session, Body::<()>::Empty)
            .await
            .map(drop)
    }

    // =========================================================================
    // Boards
    // =========================================================================

    /// Create a board owned by the signed-in user (`POST /boards/`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, board), fields(name = %board.name, private = board.private))]
    pub async fn create_board(&self, board: &BoardPayload) -> Result<(), ApiError> {
        self.send(Method::POST, ApiRoute::Boards, Body::Json(board))
            .await
            .map(drop)
    }

    /// Rename a board or change its privacy (`PUT /boards/{id}`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, board), fields(board_id = %board_id))]
    pub async fn update_board(
        &self,
        board_id: &BoardId,
        board: &BoardPayload,
    ) -> Result<(), ApiError> {
        self.send(Method::PUT, ApiRoute::Board(board_id), Body::Json(board))
            .await
            .map(drop)
    }

    /// Delete a board (`DELETE /boards/{id}`, no body).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(board_id = %board_id))]
    pub async fn delete_board(&self, board_id: &BoardId) -> Result<(), ApiError> {
        self.send(Method::DELETE, ApiRoute::Board(board_id), Body::<()>::Empty)
            .await
            .map(drop)
    }

    /// Fetch a single board.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// body is not a board.
    #[instrument(skip(self), fields(board_id = %board_id))]
    pub async fn get_board(&self, board_id: &BoardId) -> Result<Board, ApiError> {
        let response = self
            .send(Method::GET, ApiRoute::Board(board_id), Body::<()>::Empty)
            .await?;
        read_json(response).await
    }

    /// List every board of the signed-in user (`GET /me/`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// body is not a list of boards.
    #[instrument(skip(self))]
    pub async fn my_boards(&self) -> Result<Vec<Board>, ApiError> {
        let response = self
            .send_with_query(ApiRoute::Me, &[("show_page", "false")])
            .await?;
        read_json(response).await
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Add a card to a board (`POST /boards/{id}/cards`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, card), fields(board_id = %board_id, url = %card.url))]
    pub async fn create_card(&self, board_id: &BoardId, card: &NewCard) -> Result<(), ApiError> {
        self.send(Method::POST, ApiRoute::BoardCards(board_id), Body::Json(card))
            .await
            .map(drop)
    }

    /// Edit a card's title, description and thumbnail (`PUT /cards/{id}`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self, card), fields(card_id = %card_id))]
    pub async fn update_card(&self, card_id: &CardId, card: &CardUpdate) -> Result<(), ApiError> {
        self.send(Method::PUT, ApiRoute::Card(card_id), Body::Json(card))
            .await
            .map(drop)
    }

    /// Delete a card (`DELETE /cards/{id}`, no body).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(card_id = %card_id))]
    pub async fn delete_card(&self, card_id: &CardId) -> Result<(), ApiError> {
        self.send(Method::DELETE, ApiRoute::Card(card_id), Body::<()>::Empty)
            .await
            .map(drop)
    }

    /// Fetch a single card.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// body is not a card.
    #[instrument(skip(self), fields(card_id = %card_id))]
    pub async fn get_card(&self, card_id: &CardId) -> Result<Card, ApiError> {
        let response = self
            .send(Method::GET, ApiRoute::Card(card_id), Body::<()>::Empty)
            .await?;
        read_json(response).await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn url(&self, route: ApiRoute<'_>) -> Result<Url, ApiError> {
        let path = route.path();
        self.inner
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        route: ApiRoute<'_>,
        body: Body<'_, T>,
    ) -> Result<Response, ApiError> {
        let request = self.inner.client.request(method, self.url(route)?);
        let request = match body {
            Body::Json(payload) => request.json(payload),
            Body::Form(payload) => request.form(payload),
            Body::Empty => request,
        };
        execute(request).await
    }

    async fn send_with_query(
        &self,
        route: ApiRoute<'_>,
        query: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        let request = self.inner.client.get(self.url(route)?).query(query);
        execute(request).await
    }
}

/// Send the request and turn non-2xx answers into [`ApiError::Api`].
async fn execute(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        debug!(status = status.as_u16(), url = %response.url(), "Request succeeded");
        return Ok(response);
    }

    let url = response.url().clone();
    let text = response.text().await?;
    let body: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        ApiError::Parse(format!("{status} error body from {url} is not JSON: {e}"))
    })?;

    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });

    warn!(status = status.as_u16(), url = %url, message = %message, "Backend rejected request");

    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::new(base).expect("config")).expect("client")
    }

    #[test]
    fn test_url_joins_relative_to_base() {
        let api = client("http://localhost:8000");
        let url = api.url(ApiRoute::Boards).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/boards/");
    }

    #[test]
    fn test_url_keeps_base_prefix() {
        let api = client("https://example.org/recommend");
        let board = BoardId::new("b1");
        let url = api.url(ApiRoute::BoardCards(&board)).expect("url");
        assert_eq!(url.as_str(), "https://example.org/recommend/boards/b1/cards");
    }

    #[test]
    fn test_session_token_from_config() {
        let mut config = ClientConfig::new("http://localhost:8000").expect("config");
        config.access_token = Some(SecretString::from("eyJ.token".to_string()));
        let api = ApiClient::new(&config).expect("client");

        let token = api.session_token().expect("token seeded into jar");
        assert_eq!(token.expose_secret(), "eyJ.token");
    }

    #[test]
    fn test_no_session_token_by_default() {
        assert!(client("http://localhost:8000").session_token().is_none());
    }

    #[test]
    fn test_debug_shows_base_url_only() {
        let api = client("http://localhost:8000");
        let debug = format!("{api:?}");
        assert!(debug.contains("http://localhost:8000/"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let api = client("http://127.0.0.1:9");
        let err = api.logout().await.expect_err("no server listening");
        assert!(matches!(err, ApiError::Http(_)));
    }
}
