//! Method dispatch for requests served from an existing context.
//!
//! `initialize` is not dispatched here: it creates the context, so the HTTP
//! handler answers it directly with [`initialize_result`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use salesq_core::SalesContext;

use crate::jsonrpc::RpcError;
use crate::{resources, tools};

pub const PROTOCOL_VERSION: &str = "2025-03-26";
pub const SERVER_NAME: &str = "salesq";

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ReadParams {
    uri: String,
}

pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "Query a synthetic sales dataset with the list, search and fetch tools. All data is generated."
    })
}

pub fn dispatch(ctx: &SalesContext, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
    match method {
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": tools::descriptors(ctx.engine().store().len()) })),
        "tools/call" => {
            let call: CallParams = params_as(params)?;
            tools::call(ctx, &call.name, call.arguments)
        }
        "resources/list" => Ok(resources::list(ctx)),
        "resources/read" => {
            let read: ReadParams = params_as(params)?;
            resources::read(ctx, &read.uri)
        }
        other => Err(RpcError::method_not_found(other)),
    }
}

fn params_as<T: DeserializeOwned>(params: Option<Value>) -> Result<T, RpcError> {
    let params = params.ok_or_else(|| RpcError::invalid_params("missing params"))?;
    serde_json::from_value(params).map_err(|e| RpcError::invalid_params(format!("invalid params: {e}")))
}
