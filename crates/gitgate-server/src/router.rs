use std::sync::Arc;

use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use gitgate_backend::ObjectBackend;

use crate::handler::{self, GatewayState};

/// Build the axum router for the gateway.
///
/// Every route under `/blob/` is handled by the dispatcher for all
/// methods; the dispatcher itself 404s anything but GET. Unmatched paths
/// fall back to axum's bodyless 404.
pub fn build_router(backend: Arc<dyn ObjectBackend>) -> Router {
    Router::new()
        .route("/blob/*target", any(handler::serve_blob))
        .layer(TraceLayer::new_for_http())
        .with_state(GatewayState { backend })
}
