//! HTTP surface over [`AnalysisEngine`](crate::engine::AnalysisEngine).

pub mod config;
pub mod error;
pub mod handler;
pub mod router;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::engine::AnalysisEngine;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;

pub struct StringServer {
    config: ServerConfig,
    engine: Arc<AnalysisEngine>,
}

impl StringServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            engine: Arc::new(AnalysisEngine::new()),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn engine(&self) -> &Arc<AnalysisEngine> {
        &self.engine
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.engine))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let addr = self.config.bind_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        tracing::info!("string analysis server listening on {}", addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = StringServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr.port(), 4000);
        assert!(server.engine().store().is_empty());
    }

    #[test]
    fn router_builds() {
        let server = StringServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
