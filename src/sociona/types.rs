//! Typed request and response schemas for the Sociona API
//!
//! Every endpoint deserializes into one of these shapes at the client
//! boundary; a missing or malformed field surfaces as a declared
//! malformed-response error instead of an unhandled fault downstream.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Social media platform a post targets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    X,
    Instagram,
    Threads,
}

impl Platform {
    /// Wire name as the API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X => "X",
            Platform::Instagram => "INSTAGRAM",
            Platform::Threads => "THREADS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connected account as returned by GET /accounts
///
/// `provider` stays a plain string: the upstream may grow providers this
/// adapter does not know about, and listing them in error messages must not
/// break deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    pub id: String,
    pub provider: String,
    pub handle: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct AccountsResponse {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Body for POST /posts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub account_id: String,
    pub platform: Platform,
    pub content: String,
    pub media_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostResponse {
    pub post: CreatedPost,
}

/// Identifier and status of a freshly created post
#[derive(Debug, Deserialize)]
pub struct CreatedPost {
    pub id: String,
    pub status: String,
}

/// Published post as returned by GET /posts
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub provider: String,
    pub status: String,
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub stats: PostStats,
}

/// Aggregate counters from GET /posts/stats
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostStats {
    pub total: u64,
    pub published: u64,
    pub failed: u64,
    pub scheduled: u64,
}

/// Body for POST /schedule
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    pub account_id: String,
    pub platform: Platform,
    pub content: String,
    /// ISO 8601 datetime, forwarded verbatim; the upstream scheduler is
    /// authoritative for validation
    pub scheduled_for: String,
    pub media_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleResponse {
    pub scheduled_post: CreatedSchedule,
}

#[derive(Debug, Deserialize)]
pub struct CreatedSchedule {
    pub id: String,
}

/// Pending post as returned by GET /schedule
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    pub provider: String,
    pub status: String,
    pub scheduled_for: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPostsResponse {
    #[serde(default)]
    pub scheduled_posts: Vec<ScheduledPost>,
}

/// Result of DELETE /schedule/{id}
///
/// The upstream reports cancellation failures with a 200 body carrying
/// `success: false` and a message rather than an error status.
#[derive(Debug, Deserialize)]
pub struct CancelOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_platform_wire_names() {
        assert_eq!(Platform::X.as_str(), "X");
        assert_eq!(Platform::Instagram.as_str(), "INSTAGRAM");
        assert_eq!(Platform::Threads.as_str(), "THREADS");
        assert_eq!(Platform::Threads.to_string(), "THREADS");
    }

    #[test]
    fn test_platform_deserializes_screaming_case() {
        let platform: Platform = serde_json::from_value(json!("INSTAGRAM")).unwrap();
        assert_eq!(platform, Platform::Instagram);

        let unknown: Result<Platform, _> = serde_json::from_value(json!("MASTODON"));
        assert!(unknown.is_err());
    }

    #[test]
    fn test_accounts_response_parsing() {
        let response: AccountsResponse = serde_json::from_value(json!({
            "accounts": [
                {"id": "acc-1", "provider": "X", "handle": "@alice", "status": "ACTIVE"}
            ]
        }))
        .unwrap();
        assert_eq!(response.accounts.len(), 1);
        assert_eq!(response.accounts[0].provider, "X");
        assert_eq!(response.accounts[0].handle, "@alice");
    }

    #[test]
    fn test_accounts_response_missing_array_defaults_empty() {
        let response: AccountsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.accounts.is_empty());
    }

    #[test]
    fn test_new_post_serializes_camel_case() {
        let body = serde_json::to_value(NewPost {
            account_id: "acc-1".to_string(),
            platform: Platform::X,
            content: "hello".to_string(),
            media_urls: vec![],
        })
        .unwrap();
        assert_eq!(body["accountId"], "acc-1");
        assert_eq!(body["platform"], "X");
        assert_eq!(body["mediaUrls"], json!([]));
    }

    #[test]
    fn test_schedule_body_carries_scheduled_for() {
        let body = serde_json::to_value(NewSchedule {
            account_id: "acc-2".to_string(),
            platform: Platform::Threads,
            content: "later".to_string(),
            scheduled_for: "2025-10-14T10:00:00Z".to_string(),
            media_urls: vec!["https://cdn.example/a.png".to_string()],
        })
        .unwrap();
        assert_eq!(body["scheduledFor"], "2025-10-14T10:00:00Z");
        assert_eq!(body["platform"], "THREADS");
    }

    #[test]
    fn test_post_parsing_with_optional_url() {
        let post: Post = serde_json::from_value(json!({
            "provider": "X",
            "status": "PUBLISHED",
            "startedAt": "2025-10-01T09:00:00Z"
        }))
        .unwrap();
        assert!(post.url.is_none());

        let post: Post = serde_json::from_value(json!({
            "provider": "X",
            "status": "PUBLISHED",
            "startedAt": "2025-10-01T09:00:00Z",
            "url": "https://x.com/alice/status/1"
        }))
        .unwrap();
        assert_eq!(post.url.as_deref(), Some("https://x.com/alice/status/1"));
    }

    #[test]
    fn test_cancel_outcome_defaults() {
        let outcome: CancelOutcome = serde_json::from_value(json!({})).unwrap();
        assert!(!outcome.success);
        assert!(outcome.message.is_none());

        let outcome: CancelOutcome = serde_json::from_value(json!({
            "success": false,
            "message": "already published"
        }))
        .unwrap();
        assert_eq!(outcome.message.as_deref(), Some("already published"));
    }
}
