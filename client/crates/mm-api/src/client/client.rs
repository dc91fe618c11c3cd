use crate::{ApiClientResult, ApiError, MemberForm};

use mm_core::{Candidate, Identity, LikeBatch, MatchRecord, UserId};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the acting user's id on like and match endpoints.
const USER_HEADER: &str = "x-user";

/// Every successful response wraps its payload in a `data` field.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// HTTP client for the matchmaking REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub base_url: String,
    pub user_id: Option<UserId>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "https://sci-server.onrender.com")
    /// * `timeout` - Upper bound applied to every request
    pub fn new(base_url: &str, timeout: Duration) -> ApiClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: None,
            client,
        })
    }

    /// Copy of this client that identifies itself as `user_id`.
    pub fn for_user(&self, user_id: &UserId) -> Self {
        Self {
            base_url: self.base_url.clone(),
            user_id: Some(user_id.clone()),
            client: self.client.clone(),
        }
    }

    /// Build a request with optional user header
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_as(method, path, self.user_id.as_ref())
    }

    fn request_as(&self, method: Method, path: &str, user_id: Option<&UserId>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(user_id) = user_id {
            req = req.header(USER_HEADER, user_id.to_string());
        }

        req
    }

    /// Build a request for an endpoint that only answers identified callers.
    fn user_request(&self, method: Method, path: &str) -> ApiClientResult<RequestBuilder> {
        match self.user_id {
            Some(ref user_id) if !user_id.is_blank() => {
                Ok(self.request_as(method, path, Some(user_id)))
            }
            _ => Err(ApiError::validation("You must be logged in to do that.")),
        }
    }

    /// Send the request and unwrap the `data` envelope.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiClientResult<T> {
        let body = self.send(req).await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// Send the request, ignoring whatever a successful response carries.
    async fn execute_empty(&self, req: RequestBuilder) -> ApiClientResult<()> {
        self.send(req).await.map(|_| ())
    }

    async fn send(&self, req: RequestBuilder) -> ApiClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            log::debug!("Request failed with status {status}: {message:?}");
            return Err(ApiError::api_error(status.as_u16(), message));
        }

        Ok(body)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Authenticate and return the identity with secret fields removed.
    pub async fn login(&self, username: &str, password: &str) -> ApiClientResult<Identity> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(ApiError::validation("Please enter username and password"));
        }

        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = LoginRequest {
            username: username.trim(),
            password,
        };
        let req = self.request(Method::POST, "/api/users/login").json(&body);
        let data: Value = self.execute(req).await?;
        Ok(Identity::from_login_data(data)?)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// List every user in the directory
    pub async fn list_users(&self) -> ApiClientResult<Vec<Candidate>> {
        let req = self.request(Method::GET, "/api/users");
        self.execute(req).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &UserId) -> ApiClientResult<Candidate> {
        let req = self.request(Method::GET, &format!("/api/users/{}", id));
        self.execute(req).await
    }

    /// Create a user from a filled-in member form
    pub async fn create_user(&self, form: &MemberForm) -> ApiClientResult<()> {
        let body = form.create_payload()?;
        let req = self.request(Method::POST, "/api/users").json(&body);
        self.execute_empty(req).await
    }

    /// Update a user; a blank password leaves the stored one unchanged
    pub async fn update_user(&self, id: &UserId, form: &MemberForm) -> ApiClientResult<()> {
        let body = form.update_payload()?;
        let req = self
            .request(Method::PUT, &format!("/api/users/{}", id))
            .json(&body);
        self.execute_empty(req).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &UserId) -> ApiClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/users/{}", id));
        self.execute_empty(req).await
    }

    // =========================================================================
    // Likes
    // =========================================================================

    /// Submit a batch of likes on behalf of the batch's requester
    pub async fn submit_likes(&self, batch: &LikeBatch) -> ApiClientResult<()> {
        if batch.is_empty() {
            return Err(ApiError::validation("Select at least one person first."));
        }
        let req = self
            .for_user(&batch.requester_id)
            .user_request(Method::POST, "/api/likes")?
            .json(batch);
        self.execute_empty(req).await
    }

    /// Remove every like on the server
    pub async fn delete_all_likes(&self) -> ApiClientResult<()> {
        let req = self.user_request(Method::DELETE, "/api/likes/delete/all")?;
        self.execute_empty(req).await
    }

    // =========================================================================
    // Matches
    // =========================================================================

    /// List the mutual matches the server has computed
    pub async fn list_matches(&self) -> ApiClientResult<Vec<MatchRecord>> {
        let req = self.user_request(Method::GET, "/api/matches")?;
        self.execute(req).await
    }

    /// Ask the server to recompute matches from the current likes
    pub async fn generate_matches(&self) -> ApiClientResult<()> {
        let req = self.user_request(Method::GET, "/api/matches/generate")?;
        self.execute_empty(req).await
    }

    /// Remove every computed match on the server
    pub async fn delete_all_matches(&self) -> ApiClientResult<()> {
        let req = self.user_request(Method::DELETE, "/api/matches/delete/all")?;
        self.execute_empty(req).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": ".."}`, `{"error": {"message": ".."}}` and
/// `{"error": ".."}`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.pointer("/error/message").and_then(Value::as_str))
        .or_else(|| value.get("error").and_then(Value::as_str))?;

    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
