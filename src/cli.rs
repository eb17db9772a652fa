//! CLI mode implementation
//!
//! The tool argument structs double as the MCP input schemas: clap parses
//! them on the command line and schemars derives the `inputSchema` advertised
//! over the protocol, so the two surfaces cannot drift apart.

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sociona::types::Platform;

/// Sociona MCP CLI
#[derive(Parser)]
#[command(name = "sociona-mcp")]
#[command(about = "Publish and manage social media posts via the Sociona API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a social media post immediately
    Publish(PublishArgs),
    /// Schedule a post for future publication
    Schedule(ScheduleArgs),
    /// List connected social media accounts
    Accounts(AccountsArgs),
    /// List recent posts published via the API
    Posts(PostsArgs),
    /// List scheduled posts
    Scheduled(ScheduledArgs),
    /// Cancel a scheduled post before it publishes
    Cancel(CancelArgs),
    /// Show statistics about your posts
    Stats(StatsArgs),
}

/// publish_post tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct PublishArgs {
    /// Social media platform
    #[arg(short = 'p', long, value_enum)]
    #[schemars(description = "Social media platform")]
    pub platform: Platform,

    /// Post content/text
    #[arg(short = 'c', long)]
    #[schemars(description = "Post content/text")]
    pub content: String,

    /// Optional media URLs to attach
    #[arg(long = "media-url")]
    #[serde(default, rename = "mediaUrls")]
    #[schemars(description = "Optional media URLs to attach")]
    pub media_urls: Vec<String>,
}

/// schedule_post tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct ScheduleArgs {
    /// Social media platform
    #[arg(short = 'p', long, value_enum)]
    #[schemars(description = "Social media platform")]
    pub platform: Platform,

    /// Post content
    #[arg(short = 'c', long)]
    #[schemars(description = "Post content")]
    pub content: String,

    /// ISO 8601 datetime (e.g., 2025-10-14T10:00:00Z)
    #[arg(short = 't', long = "at")]
    #[serde(rename = "scheduledFor")]
    #[schemars(description = "ISO 8601 datetime (e.g., 2025-10-14T10:00:00Z)")]
    pub scheduled_for: String,

    /// Optional media URLs to attach
    #[arg(long = "media-url")]
    #[serde(default, rename = "mediaUrls")]
    #[schemars(description = "Optional media URLs to attach")]
    pub media_urls: Vec<String>,
}

/// get_accounts tool arguments (none)
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct AccountsArgs {}

/// get_posts tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct PostsArgs {
    /// Number of posts to retrieve (max 100)
    #[arg(short = 'l', long)]
    #[schemars(range(min = 1, max = 100))]
    #[schemars(description = "Number of posts to retrieve (max 100)")]
    pub limit: Option<u32>,
}

/// get_scheduled_posts tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct ScheduledArgs {
    /// Filter by scheduled-post status
    #[arg(short = 's', long)]
    #[schemars(description = "Filter by scheduled-post status")]
    pub status: Option<String>,
}

/// cancel_scheduled_post tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct CancelArgs {
    /// The ID of the scheduled post to cancel
    #[arg(short = 'i', long = "id")]
    #[serde(rename = "postId")]
    #[schemars(description = "The ID of the scheduled post to cancel")]
    pub post_id: String,
}

/// get_post_stats tool arguments (none)
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct StatsArgs {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_publish_args_from_tool_call_json() {
        let args: PublishArgs = serde_json::from_value(json!({
            "platform": "X",
            "content": "Hello world"
        }))
        .unwrap();
        assert_eq!(args.platform, Platform::X);
        assert_eq!(args.content, "Hello world");
        assert!(args.media_urls.is_empty());
    }

    #[test]
    fn test_schedule_args_require_scheduled_for() {
        let missing: Result<ScheduleArgs, _> = serde_json::from_value(json!({
            "platform": "THREADS",
            "content": "later"
        }));
        assert!(missing.is_err());

        let args: ScheduleArgs = serde_json::from_value(json!({
            "platform": "THREADS",
            "content": "later",
            "scheduledFor": "2025-10-14T10:00:00Z",
            "mediaUrls": ["https://cdn.example/a.png"]
        }))
        .unwrap();
        assert_eq!(args.scheduled_for, "2025-10-14T10:00:00Z");
        assert_eq!(args.media_urls.len(), 1);
    }

    #[test]
    fn test_cancel_args_use_post_id_key() {
        let args: CancelArgs = serde_json::from_value(json!({"postId": "sp-42"})).unwrap();
        assert_eq!(args.post_id, "sp-42");
    }

    #[test]
    fn test_posts_args_limit_optional() {
        let args: PostsArgs = serde_json::from_value(json!({})).unwrap();
        assert!(args.limit.is_none());

        let args: PostsArgs = serde_json::from_value(json!({"limit": 10})).unwrap();
        assert_eq!(args.limit, Some(10));
    }
}
