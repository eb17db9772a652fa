//! Sociona API client
//!
//! A thin authenticated wrapper around the upstream publishing API. One
//! request function builds the URL, attaches the bearer token and JSON body,
//! and deserializes the response into the typed schemas from
//! [`crate::sociona::types`]; per-endpoint methods stay one-liners on top.

use crate::config::Config;
use crate::error::AppError;
use crate::sociona::types::{
    Account, AccountsResponse, CancelOutcome, CreatePostResponse, CreateScheduleResponse,
    CreatedPost, CreatedSchedule, NewPost, NewSchedule, Post, PostStats, PostsResponse,
    ScheduledPost, ScheduledPostsResponse, StatsResponse,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Sociona API client
pub struct SocionaClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl SocionaClient {
    pub fn new(config: &Config) -> Self {
        let client = crate::http::client_with_timeout(Duration::from_secs(30));
        Self {
            client,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issue an authenticated request and deserialize the JSON response
    ///
    /// Non-success statuses become [`AppError::Api`] carrying the upstream
    /// `message` field when the error body is JSON, or a generic status line
    /// otherwise. Success bodies that do not match the expected schema become
    /// [`AppError::MalformedResponse`].
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.api_base, path);
        debug!("Making {} request to {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Api(upstream_error_message(status, &text)));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }

    /// GET /accounts
    pub async fn accounts(&self) -> Result<Vec<Account>, AppError> {
        let response: AccountsResponse = self.request(Method::GET, "/accounts", None).await?;
        Ok(response.accounts)
    }

    /// POST /posts
    pub async fn create_post(&self, post: &NewPost) -> Result<CreatedPost, AppError> {
        let body = serde_json::to_value(post).map_err(|e| AppError::Internal(e.to_string()))?;
        let response: CreatePostResponse =
            self.request(Method::POST, "/posts", Some(&body)).await?;
        Ok(response.post)
    }

    /// GET /posts?limit=
    pub async fn posts(&self, limit: u32) -> Result<Vec<Post>, AppError> {
        let path = format!("/posts?limit={}", limit);
        let response: PostsResponse = self.request(Method::GET, &path, None).await?;
        Ok(response.posts)
    }

    /// GET /posts/stats
    pub async fn post_stats(&self) -> Result<PostStats, AppError> {
        let response: StatsResponse = self.request(Method::GET, "/posts/stats", None).await?;
        Ok(response.stats)
    }

    /// POST /schedule
    pub async fn create_schedule(
        &self,
        schedule: &NewSchedule,
    ) -> Result<CreatedSchedule, AppError> {
        let body =
            serde_json::to_value(schedule).map_err(|e| AppError::Internal(e.to_string()))?;
        let response: CreateScheduleResponse =
            self.request(Method::POST, "/schedule", Some(&body)).await?;
        Ok(response.scheduled_post)
    }

    /// GET /schedule, optionally filtered by status
    pub async fn scheduled_posts(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<ScheduledPost>, AppError> {
        let path = match status {
            Some(status) => format!("/schedule?status={}", status),
            None => "/schedule".to_string(),
        };
        let response: ScheduledPostsResponse = self.request(Method::GET, &path, None).await?;
        Ok(response.scheduled_posts)
    }

    /// DELETE /schedule/{id}
    pub async fn cancel_schedule(&self, post_id: &str) -> Result<CancelOutcome, AppError> {
        let path = format!("/schedule/{}", post_id);
        self.request(Method::DELETE, &path, None).await
    }
}

/// Extract the failure message from an upstream error body
///
/// JSON bodies with a `message` field win; anything else falls back to a
/// generic line naming the HTTP status.
fn upstream_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("API request failed with status {}", status.as_u16()))
}
