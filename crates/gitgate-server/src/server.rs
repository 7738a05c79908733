use std::sync::Arc;

use tokio::net::TcpListener;

use gitgate_backend::ObjectBackend;

use crate::config::GatewayConfig;
use crate::error::GatewayResult;
use crate::router::build_router;

/// The gitgate HTTP server.
pub struct GatewayServer {
    config: GatewayConfig,
    backend: Arc<dyn ObjectBackend>,
}

impl GatewayServer {
    pub fn new(config: GatewayConfig, backend: Arc<dyn ObjectBackend>) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.backend.clone())
    }

    /// Bind and serve requests until the process exits.
    pub async fn serve(self) -> GatewayResult<()> {
        let app = build_router(self.backend);
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        tracing::info!("gitgate listening on {}", self.config.bind_addr());
        axum::serve(listener, app).await?;
        Ok(())
    }
}
