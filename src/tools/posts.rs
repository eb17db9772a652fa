//! get_posts tool: list recent posts published via the API

use crate::cli::PostsArgs;
use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::Post;
use futures::future::BoxFuture;
use serde_json::Value;

/// Page size used when the caller does not ask for one
pub const DEFAULT_LIMIT: u32 = 50;

pub fn handle(client: &SocionaClient, args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(async move {
        let args: PostsArgs = serde_json::from_value(args)
            .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;
        run(client, args).await
    })
}

/// Execute get_posts (shared implementation for MCP and CLI)
pub async fn run(client: &SocionaClient, args: PostsArgs) -> Result<ToolResult, AppError> {
    let limit = args.limit.unwrap_or(DEFAULT_LIMIT);
    let posts = client.posts(limit).await?;
    Ok(ToolResult::text(render(&posts)))
}

/// Render one line per post as `provider: status (startedAt) [URL]`
pub fn render(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found.".to_string();
    }

    let list = posts
        .iter()
        .map(|p| match &p.url {
            Some(url) => format!("- {}: {} ({}) URL: {}", p.provider, p.status, p.started_at, url),
            None => format!("- {}: {} ({})", p.provider, p.status, p.started_at),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Recent posts (last {}):\n{}", posts.len(), list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(provider: &str, status: &str, url: Option<&str>) -> Post {
        Post {
            provider: provider.to_string(),
            status: status.to_string(),
            started_at: "2025-10-01T09:00:00Z".to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_default_limit_is_fifty() {
        assert_eq!(DEFAULT_LIMIT, 50);
        let args = PostsArgs { limit: None };
        assert_eq!(args.limit.unwrap_or(DEFAULT_LIMIT), 50);

        let args = PostsArgs { limit: Some(10) };
        assert_eq!(args.limit.unwrap_or(DEFAULT_LIMIT), 10);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "No posts found.");
    }

    #[test]
    fn test_render_with_and_without_url() {
        let posts = vec![
            post("X", "PUBLISHED", Some("https://x.com/a/1")),
            post("THREADS", "FAILED", None),
        ];
        assert_eq!(
            render(&posts),
            "Recent posts (last 2):\n\
             - X: PUBLISHED (2025-10-01T09:00:00Z) URL: https://x.com/a/1\n\
             - THREADS: FAILED (2025-10-01T09:00:00Z)"
        );
    }
}
