//! publish_post tool: publish a post immediately through a connected account

use crate::cli::PublishArgs;
use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::NewPost;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::info;

pub fn handle(client: &SocionaClient, args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(async move {
        let args: PublishArgs = serde_json::from_value(args)
            .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;
        run(client, args).await
    })
}

/// Execute publish_post (shared implementation for MCP and CLI)
///
/// The account is re-resolved on every call; nothing is cached, so the
/// lookup always reflects current upstream state.
pub async fn run(client: &SocionaClient, args: PublishArgs) -> Result<ToolResult, AppError> {
    let accounts = client.accounts().await?;
    let account = super::find_account(&accounts, args.platform)?;

    info!(
        "Publishing post to {} via account {}",
        args.platform, account.id
    );

    let created = client
        .create_post(&NewPost {
            account_id: account.id.clone(),
            platform: args.platform,
            content: args.content,
            media_urls: args.media_urls,
        })
        .await?;

    Ok(ToolResult::text(render(args.platform.as_str(), &created.status, &created.id)))
}

fn render(platform: &str, status: &str, id: &str) -> String {
    format!(
        "✅ Post published to {}!\nStatus: {}\nPost ID: {}",
        platform, status, id
    )
}
