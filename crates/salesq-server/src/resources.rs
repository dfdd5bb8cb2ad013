//! MCP resources: the whole dataset at the resource URI, and single records
//! at `{uri}#{id}`.

use serde_json::{json, Value};

use salesq_core::{FetchParams, ListParams, SalesContext};

use crate::jsonrpc::RpcError;
use crate::tools::to_json;

const MIME_JSON: &str = "application/json";

pub fn list(ctx: &SalesContext) -> Value {
    json!({
        "resources": [{
            "uri": ctx.engine().resource_uri(),
            "name": "sales-dataset",
            "description": "Synthetic sales records generated for this session.",
            "mimeType": MIME_JSON
        }]
    })
}

pub fn read(ctx: &SalesContext, uri: &str) -> Result<Value, RpcError> {
    let engine = ctx.engine();
    let body = if uri == engine.resource_uri() {
        to_json(&ctx.list(ListParams::default())?)?
    } else {
        let id = engine.resolve_locator(uri);
        if id == uri {
            return Err(RpcError::invalid_params(format!("unknown resource: {uri}")));
        }
        to_json(&ctx.fetch(FetchParams {
            id: id.to_string(),
            ids: None,
        })?)?
    };

    Ok(json!({
        "contents": [{
            "uri": uri,
            "mimeType": MIME_JSON,
            "text": body.to_string()
        }]
    }))
}
