//! HTTP handlers: the JSON-RPC POST endpoint, session DELETE and health.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::error::ServerError;
use crate::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, RpcError, INTERNAL_ERROR, JSONRPC_VERSION, SERVER_BUSY,
    UNKNOWN_SESSION,
};
use crate::rpc;
use crate::state::AppState;

/// Header carrying the session id issued by `initialize`.
pub const SESSION_HEADER: &str = "mcp-session-id";

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST {path} - one JSON-RPC message
pub async fn post_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err((id, err)) => {
            tracing::warn!(code = err.code, message = %err.message, "rejected malformed message");
            return rpc_response(StatusCode::BAD_REQUEST, JsonRpcResponse::failure(id, err));
        }
    };

    let Some(id) = request.id else {
        tracing::debug!(method = %request.method, "notification acknowledged");
        return StatusCode::ACCEPTED.into_response();
    };

    if request.method == "initialize" {
        return initialize(&state, id).await;
    }

    let context = match session_id(&headers) {
        Some(session) => match state.sessions().get(session).await {
            Some(context) => context,
            None => return unknown_session(id, session),
        },
        // Sessionless requests get a throwaway context of their own.
        None => Arc::new(state.fresh_context()),
    };

    let response = match rpc::dispatch(&context, &request.method, request.params) {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(err) => {
            if err.code == INTERNAL_ERROR {
                tracing::error!(method = %request.method, "request failed");
            } else {
                tracing::warn!(method = %request.method, code = err.code, message = %err.message, "request rejected");
            }
            JsonRpcResponse::failure(id, err)
        }
    };
    rpc_response(StatusCode::OK, response)
}

/// DELETE {path} - end the session named by the session header
pub async fn delete_session(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    let Some(session) = session_id(&headers) else {
        return StatusCode::BAD_REQUEST;
    };
    if state.sessions().close(session).await {
        tracing::info!(session, "session closed");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn initialize(state: &AppState, id: Value) -> Response {
    match state.sessions().open(state.fresh_context()).await {
        Ok(session) => {
            tracing::info!(session = %session, "session opened");
            (
                StatusCode::OK,
                [(SESSION_HEADER, session)],
                Json(JsonRpcResponse::success(id, rpc::initialize_result())),
            )
                .into_response()
        }
        Err(ServerError::SessionLimit { max }) => {
            tracing::warn!(max, "refusing new session");
            rpc_response(
                StatusCode::SERVICE_UNAVAILABLE,
                JsonRpcResponse::failure(id, RpcError::new(SERVER_BUSY, "session limit reached")),
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to open session");
            rpc_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                JsonRpcResponse::failure(id, RpcError::internal()),
            )
        }
    }
}

fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, (Value, RpcError)> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| (Value::Null, RpcError::parse_error()))?;
    let id = value.get("id").cloned().unwrap_or(Value::Null);

    if !value.is_object() {
        return Err((id, RpcError::invalid_request("expected a single JSON-RPC request object")));
    }
    let request: JsonRpcRequest = serde_json::from_value(value)
        .map_err(|e| (id.clone(), RpcError::invalid_request(e.to_string())))?;
    if request.jsonrpc != JSONRPC_VERSION {
        return Err((id, RpcError::invalid_request("jsonrpc must be \"2.0\"")));
    }
    Ok(request)
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

fn unknown_session(id: Value, session: &str) -> Response {
    tracing::warn!(session, "unknown session");
    rpc_response(
        StatusCode::NOT_FOUND,
        JsonRpcResponse::failure(id, RpcError::new(UNKNOWN_SESSION, "unknown session")),
    )
}

fn rpc_response(status: StatusCode, response: JsonRpcResponse) -> Response {
    (status, Json(response)).into_response()
}
