//! API client for communicating with the CareerPilot REST API.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests for roadmaps, daily plans and topic explanations.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use crate::auth::SessionData;
use crate::models::{
    DailyPlanGroup, DailyPlanResponse, DeleteResponse, GenerateDailyPlanRequest,
    GenerateRoadmapRequest, GenerateRoadmapResponse, LoginResponse, RegisterRequest, RoleKey,
    TeachTopicRequest, TeachTopicResponse, User,
};
use crate::planner::PlanService;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default API location for a locally running backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// HTTP request timeout in seconds.
/// AI generation endpoints routinely take 20-40s.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Maximum number of retries for rate-limited (429) requests.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// API client for the CareerPilot backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate and return session data
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<SessionData> {
        let url = self.url("/auth/login");

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(ApiError::NetworkError)
            .context("Failed to send authentication request")?;

        let response = Self::check_response(response).await?;

        let login: LoginResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;

        info!(username = username, "Authenticated");

        Ok(SessionData {
            token: login.access_token,
            token_type: login.token_type,
            username: username.to_string(),
            user: Some(login.user),
            created_at: Utc::now(),
        })
    }

    /// Create a new account. Does not log in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        self.post("/auth/register", request).await
    }

    /// Fetch the account behind the current token
    pub async fn current_user(&self) -> Result<User> {
        self.get("/auth/me").await
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit (should retry),
    /// or Err for other errors.
    async fn check_response_for_retry(response: Response) -> Result<Option<Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status().as_u16() == 429 {
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Send a request, backing off and retrying while the server rate limits.
    async fn execute(&self, method: &str, url: &str, build: impl Fn() -> RequestBuilder) -> Result<Response> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = build()
                .headers(self.auth_headers()?)
                .send()
                .await
                .map_err(ApiError::NetworkError)
                .with_context(|| format!("Failed to send {} request to {}", method, url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => return Ok(response),
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.execute("GET", &url, || self.client.get(&url)).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .execute("POST", &url, || self.client.post(&url).json(body))
            .await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .execute("DELETE", &url, || self.client.delete(&url))
            .await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== AI Endpoints =====

    /// Fetch every active daily plan for the current user
    pub async fn fetch_daily_plans(&self) -> Result<Vec<DailyPlanResponse>> {
        self.get("/ai/daily-plans").await
    }

    pub async fn generate_roadmap(&self, request: &GenerateRoadmapRequest) -> Result<GenerateRoadmapResponse> {
        self.post("/ai/generate-roadmap", request).await
    }

    pub async fn generate_daily_plan(&self, role_key: RoleKey) -> Result<DailyPlanResponse> {
        let body = GenerateDailyPlanRequest {
            user_role_id: role_key,
        };
        self.post("/ai/generate-daily-plan", &body).await
    }

    /// Delete a daily plan together with its role and roadmap
    pub async fn delete_daily_plan(&self, role_key: RoleKey) -> Result<DeleteResponse> {
        self.delete(&format!("/ai/daily-plans/{}", role_key)).await
    }

    /// Delete a roadmap together with its role and daily plan
    pub async fn delete_roadmap(&self, role_key: RoleKey) -> Result<DeleteResponse> {
        self.delete(&format!("/ai/roadmaps/{}", role_key)).await
    }

    pub async fn teach_topic(&self, request: &TeachTopicRequest) -> Result<TeachTopicResponse> {
        self.post("/ai/teach-topic", request).await
    }
}

impl PlanService for ApiClient {
    async fn fetch_roster(&self) -> Result<Vec<DailyPlanGroup>> {
        let responses = self.fetch_daily_plans().await?;
        debug!(count = responses.len(), "Fetched daily plan roster");
        Ok(into_roster(responses))
    }

    async fn generate_roadmap(&self, request: &GenerateRoadmapRequest) -> Result<GenerateRoadmapResponse> {
        ApiClient::generate_roadmap(self, request).await
    }

    async fn generate_daily_plan(&self, role_key: RoleKey) -> Result<DailyPlanResponse> {
        ApiClient::generate_daily_plan(self, role_key).await
    }

    async fn delete_daily_plan(&self, role_key: RoleKey) -> Result<()> {
        let resp = ApiClient::delete_daily_plan(self, role_key).await?;
        debug!(role_key = %role_key, message = %resp.message, "Deleted daily plan");
        Ok(())
    }

    async fn delete_roadmap(&self, role_key: RoleKey) -> Result<()> {
        let resp = ApiClient::delete_roadmap(self, role_key).await?;
        debug!(role_key = %role_key, message = %resp.message, "Deleted roadmap");
        Ok(())
    }

    async fn teach_topic(&self, request: &TeachTopicRequest) -> Result<TeachTopicResponse> {
        ApiClient::teach_topic(self, request).await
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Convert raw roster responses into groups, dropping any without a role key.
fn into_roster(responses: Vec<DailyPlanResponse>) -> Vec<DailyPlanGroup> {
    responses
        .into_iter()
        .filter_map(DailyPlanResponse::into_group)
        .collect()
}
