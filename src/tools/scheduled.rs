//! get_scheduled_posts tool: list pending scheduled posts

use crate::cli::ScheduledArgs;
use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::ScheduledPost;
use futures::future::BoxFuture;
use serde_json::Value;

pub fn handle(client: &SocionaClient, args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(async move {
        let args: ScheduledArgs = serde_json::from_value(args)
            .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;
        run(client, args).await
    })
}

/// Execute get_scheduled_posts (shared implementation for MCP and CLI)
pub async fn run(client: &SocionaClient, args: ScheduledArgs) -> Result<ToolResult, AppError> {
    let posts = client.scheduled_posts(args.status.as_deref()).await?;
    Ok(ToolResult::text(render(&posts)))
}

/// Render provider, status, scheduledFor and content per entry, blank line
/// between entries
pub fn render(posts: &[ScheduledPost]) -> String {
    if posts.is_empty() {
        return "No scheduled posts found.".to_string();
    }

    let list = posts
        .iter()
        .map(|p| {
            format!(
                "- {}: {} - Scheduled for {}\n  Content: {}",
                p.provider, p.status, p.scheduled_for, p.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Scheduled posts:\n{}", list)
}
