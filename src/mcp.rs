//! MCP (Model Context Protocol) handling module
//!
//! Implements the JSON-RPC 2.0 protocol for MCP communication over stdio.
//! Tool-call failures never become JSON-RPC errors: they ride inside a
//! success envelope as an `isError: true` tool result, so the client always
//! receives a structured response. JSON-RPC errors are reserved for
//! transport-level problems (unparseable lines, unknown methods, bad params).

use crate::sociona::client::SocionaClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader as AsyncBufReader};
use tracing::{debug, error, info};

/// MCP JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version field - required by JSON-RPC 2.0 but not accessed in code
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// Initialize request parameters
#[derive(Debug, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information
#[derive(Debug, Deserialize, Clone)]
pub struct ClientInfo {
    pub name: Option<String>,
    #[allow(dead_code)]
    pub version: Option<String>,
}

/// MCP JSON-RPC 2.0 response structure
#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

/// MCP Error structure
#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: String,
    pub message: String,
}

/// MCP Tool call arguments
#[derive(Debug, Deserialize)]
pub struct ToolCallArgs {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// MCP Content item
#[derive(Debug, Serialize)]
pub struct ContentItem {
    pub r#type: String,
    pub text: String,
}

/// MCP Tool result
///
/// Always exactly one text item in this server; `isError` marks failures
/// converted at the dispatch boundary.
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Option<Value>, code: &str, message: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

impl ToolResult {
    /// Create a text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(content)],
            is_error: false,
        }
    }

    /// Create an error-shaped result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }
}

impl ContentItem {
    /// Helper to create plain text content
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            r#type: "text".to_string(),
            text: content.into(),
        }
    }
}

/// Parse MCP request from JSON string
pub fn parse_request(json: &str) -> Result<McpRequest> {
    let request: McpRequest = serde_json::from_str(json)?;
    Ok(request)
}

/// Serialize MCP response to JSON string
pub fn serialize_response(response: &McpResponse) -> Result<String> {
    Ok(serde_json::to_string(response)?)
}

/// Handle stdio MCP communication
pub async fn handle_stdio(client: &SocionaClient) -> Result<()> {
    info!("Starting sociona-mcp server on stdio");

    let stdin = tokio::io::stdin();
    let mut reader = AsyncBufReader::new(stdin).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = reader.next_line().await? {
        debug!("Received request: {}", line);

        let response = match parse_request(&line) {
            Ok(request) => handle_request(client, request).await,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                McpResponse::error(None, "parse_error", &format!("Invalid JSON: {}", e))
            }
        };

        let response_json = serialize_response(&response)?;
        debug!("Sending response: {}", response_json);

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}

/// Handle a single MCP request
async fn handle_request(client: &SocionaClient, request: McpRequest) -> McpResponse {
    match request.method.as_str() {
        "initialize" => handle_initialize(request),
        "tools/call" => handle_tool_call(client, request).await,
        "tools/list" => handle_tools_list(request),
        _ => McpResponse::error(
            request.id,
            "method_not_found",
            &format!("Method '{}' not found", request.method),
        ),
    }
}

/// Handle tools/call method
async fn handle_tool_call(client: &SocionaClient, request: McpRequest) -> McpResponse {
    let args: ToolCallArgs = match serde_json::from_value(request.params.unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(
                request.id,
                "invalid_params",
                &format!("Invalid parameters: {}", e),
            )
        }
    };

    info!("Tool call: {}", args.name);

    let result = crate::tools::dispatch(client, &args.name, args.arguments).await;
    match serde_json::to_value(&result) {
        Ok(value) => McpResponse::success(request.id, value),
        Err(e) => McpResponse::error(
            request.id,
            "internal_error",
            &format!("Failed to serialize result: {}", e),
        ),
    }
}

/// Handle tools/list method
fn handle_tools_list(request: McpRequest) -> McpResponse {
    McpResponse::success(
        request.id,
        serde_json::json!({ "tools": build_tools_array() }),
    )
}

/// Handle initialize method
fn handle_initialize(request: McpRequest) -> McpResponse {
    if let Some(params) = request.params {
        if let Ok(init) = serde_json::from_value::<InitializeParams>(params) {
            let client_name = init
                .client_info
                .and_then(|info| info.name)
                .unwrap_or_else(|| "Unknown Client".to_string());
            info!("Client connected: {}", client_name);
        }
    }

    let result = serde_json::json!({
        "serverInfo": {
            "name": "sociona-mcp",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": { "list": true, "call": true }
        },
        "tools": build_tools_array()
    });
    McpResponse::success(request.id, result)
}

/// Build the tools array returned from tools/list and initialize
fn build_tools_array() -> Value {
    let tools: Vec<Value> = crate::tools::registry()
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema(),
            })
        })
        .collect();
    Value::Array(tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn offline_client() -> SocionaClient {
        SocionaClient::new(&Config::new("test-key", "http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn test_initialize_response_contains_fields() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(1)),
            method: "initialize".into(),
            params: None,
        };
        let client = offline_client();
        let resp = handle_request(&client, req).await;
        assert!(resp.error.is_none());
        let result = resp.result.expect("result present");
        assert_eq!(
            result
                .get("serverInfo")
                .and_then(|v| v.get("name"))
                .and_then(|v| v.as_str()),
            Some("sociona-mcp")
        );
        assert_eq!(
            result
                .get("capabilities")
                .and_then(|v| v.get("tools"))
                .and_then(|v| v.get("list"))
                .and_then(|v| v.as_bool()),
            Some(true)
        );
        assert!(result.get("tools").and_then(|v| v.as_array()).is_some());
    }

    #[tokio::test]
    async fn test_tools_list_contains_all_seven_tools() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(2)),
            method: "tools/list".into(),
            params: None,
        };
        let client = offline_client();
        let resp = handle_request(&client, req).await;
        assert!(resp.error.is_none());
        let result = resp.result.expect("result present");
        let tools = result
            .get("tools")
            .and_then(|v| v.as_array())
            .expect("tools array");
        let names: Vec<&str> = tools
            .iter()
            .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
            .collect();
        for expected in [
            "publish_post",
            "schedule_post",
            "get_accounts",
            "get_posts",
            "get_scheduled_posts",
            "cancel_scheduled_post",
            "get_post_stats",
        ] {
            assert!(names.contains(&expected), "missing tool {}", expected);
        }
        assert_eq!(names.len(), 7);
    }

    #[tokio::test]
    async fn test_unknown_method_is_json_rpc_error() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(3)),
            method: "resources/list".into(),
            params: None,
        };
        let client = offline_client();
        let resp = handle_request(&client, req).await;
        let err = resp.error.expect("error present");
        assert_eq!(err.code, "method_not_found");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_result_not_rpc_error() {
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(4)),
            method: "tools/call".into(),
            params: Some(json!({"name": "make_coffee", "arguments": {}})),
        };
        let client = offline_client();
        let resp = handle_request(&client, req).await;
        assert!(resp.error.is_none(), "tool failures ride in the result");
        let result = resp.result.expect("result present");
        assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("make_coffee"));
    }

    #[tokio::test]
    async fn test_tool_call_without_arguments_field() {
        // No-arg tools may be called with the arguments key absent entirely;
        // this must not be an invalid_params error (it will fail later at the
        // network layer here, but as an isError result)
        let req = McpRequest {
            jsonrpc: "2.0".into(),
            id: Some(json!(5)),
            method: "tools/call".into(),
            params: Some(json!({"name": "get_accounts"})),
        };
        let client = offline_client();
        let resp = handle_request(&client, req).await;
        assert!(resp.error.is_none());
        let result = resp.result.expect("result present");
        assert_eq!(result.get("isError").and_then(|v| v.as_bool()), Some(true));
        assert!(result["content"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Error: "));
    }

    #[test]
    fn test_parse_request_rejects_garbage() {
        assert!(parse_request("not json").is_err());
        assert!(parse_request(r#"{"jsonrpc":"2.0","id":1,"method":"x"}"#).is_ok());
    }

    #[test]
    fn test_tool_result_serialization_shape() {
        let value = serde_json::to_value(ToolResult::error("Error: boom")).unwrap();
        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["content"][0]["type"], json!("text"));
        assert_eq!(value["content"][0]["text"], json!("Error: boom"));

        let value = serde_json::to_value(ToolResult::text("ok")).unwrap();
        assert_eq!(value["isError"], json!(false));
    }
}
