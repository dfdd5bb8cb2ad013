//! MCP tool descriptors and dispatch for `list`, `search` and `fetch`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use salesq_core::request::{MAX_EXTRA_IDS, MAX_SEARCH_LIMIT};
use salesq_core::{FetchParams, ListParams, Region, SaleStatus, SalesContext, SearchParams};

use crate::jsonrpc::{RpcError, METHOD_NOT_FOUND};

pub const TOOL_NAMES: [&str; 3] = ["list", "search", "fetch"];

/// Tool descriptors for `tools/list`; `dataset_size` bounds the list `count`.
pub fn descriptors(dataset_size: usize) -> Value {
    let regions: Vec<&str> = Region::ALL.iter().map(Region::as_str).collect();
    let statuses: Vec<&str> = SaleStatus::ALL.iter().map(SaleStatus::as_str).collect();

    json!([
        {
            "name": "list",
            "description": "List synthetic sale records in generation order.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "count": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": dataset_size.max(1),
                        "description": "Number of records to return (default: all)."
                    }
                },
                "additionalProperties": false
            }
        },
        {
            "name": "search",
            "description": "Case-insensitive substring search over customer, product, region and status, with optional exact-match filters.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "query": { "type": "string", "minLength": 1 },
                    "filters": {
                        "type": "object",
                        "properties": {
                            "customer": { "type": "string" },
                            "product": { "type": "string" },
                            "region": { "type": "string", "enum": regions },
                            "status": { "type": "string", "enum": statuses },
                            "minTotal": { "type": "number" },
                            "maxTotal": { "type": "number" }
                        },
                        "additionalProperties": false
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": MAX_SEARCH_LIMIT,
                        "default": salesq_core::request::DEFAULT_SEARCH_LIMIT
                    }
                },
                "required": ["query"],
                "additionalProperties": false
            }
        },
        {
            "name": "fetch",
            "description": "Fetch full sale records by id or search-result uri. Unknown ids are reported in `missing`.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "minLength": 1 },
                    "ids": {
                        "type": "array",
                        "items": { "type": "string", "minLength": 1 },
                        "maxItems": MAX_EXTRA_IDS
                    }
                },
                "required": ["id"],
                "additionalProperties": false
            }
        }
    ])
}

/// Run one tool call against `ctx`.
pub fn call(ctx: &SalesContext, name: &str, arguments: Option<Value>) -> Result<Value, RpcError> {
    match name {
        "list" => tool_result(&ctx.list(arguments_as::<ListParams>(arguments)?)?),
        "search" => tool_result(&ctx.search(arguments_as::<SearchParams>(arguments)?)?),
        "fetch" => tool_result(&ctx.fetch(arguments_as::<FetchParams>(arguments)?)?),
        other => Err(RpcError::new(METHOD_NOT_FOUND, format!("unknown tool: {other}"))),
    }
}

fn arguments_as<T: DeserializeOwned>(arguments: Option<Value>) -> Result<T, RpcError> {
    let arguments = match arguments {
        None | Some(Value::Null) => json!({}),
        Some(value) => value,
    };
    serde_json::from_value(arguments)
        .map_err(|e| RpcError::invalid_params(format!("invalid arguments: {e}")))
}

/// Wrap an envelope as both text content and structured content.
pub(crate) fn tool_result<T: Serialize>(envelope: &T) -> Result<Value, RpcError> {
    let structured = to_json(envelope)?;
    let text = structured.to_string();
    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": structured,
        "isError": false
    }))
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize response envelope");
        RpcError::internal()
    })
}
