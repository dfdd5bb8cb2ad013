//! salesq-server — MCP (JSON-RPC 2.0 over HTTP) transport for salesq.
//!
//! Exposes the `list`, `search` and `fetch` operations of
//! [`salesq_core::SalesContext`] as MCP tools and the dataset as an MCP
//! resource. Each `initialize` opens a session with its own freshly generated
//! dataset; requests without a session id are served from a throwaway one.

pub mod error;
pub mod handlers;
pub mod jsonrpc;
pub mod resources;
pub mod router;
pub mod rpc;
pub mod session;
pub mod state;
pub mod tools;

pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;

use std::future::Future;

use salesq_core::config::Config;

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.server.bind.clone();
    let path = config.server.path.clone();
    let records = config.dataset.records;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(records, "salesq listening on http://{}{}", addr, path);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("salesq stopped");
    Ok(())
}
