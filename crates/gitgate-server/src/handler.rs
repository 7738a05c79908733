//! The request dispatcher for `/blob/` URLs.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};

use gitgate_backend::ObjectBackend;
use gitgate_resolve::{resolve_ref, sort_refs};
use gitgate_types::ObjectId;
use gitgate_walk::walk;

use crate::error::{GatewayError, GatewayResult};

const BLOB_PREFIX: &str = "/blob/";

/// Shared router state.
#[derive(Clone)]
pub struct GatewayState {
    /// The object store serving this gateway.
    pub backend: Arc<dyn ObjectBackend>,
}

/// Serve `GET /blob/<ref-or-hash>[/<path>]`.
///
/// The target is first matched against the sorted reference set; when no
/// reference matches, the third path segment is taken as a hash literal.
/// The walker turns the result into blob bytes or a listing whose anchors
/// are prefixed with the normalized request path.
pub async fn serve_blob(
    State(state): State<GatewayState>,
    method: Method,
    uri: Uri,
) -> GatewayResult<Response> {
    if method != Method::GET {
        return Err(GatewayError::MalformedRequest);
    }

    let mut refs = state
        .backend
        .list_refs()
        .await
        .map_err(GatewayError::RefEnumeration)?;
    sort_refs(&mut refs);

    let path = normalize_path(uri.path());
    let components: Vec<&str> = path.split('/').collect();
    if components.first() != Some(&"") || components.get(1) != Some(&"blob") {
        return Err(GatewayError::MalformedRequest);
    }

    let suffix = path.get(BLOB_PREFIX.len()..).unwrap_or("");
    let (start, residual) = match resolve_ref(suffix, &refs) {
        Ok((name, residual)) => (name.to_string(), residual.to_string()),
        Err(err) => {
            // Not a known reference: treat the target as a hash literal.
            tracing::debug!(%err, "assuming hash literal");
            (
                components.get(2).copied().unwrap_or("").to_string(),
                components.get(3..).unwrap_or(&[]).join("/"),
            )
        }
    };
    tracing::debug!(target = %start, residual = %residual, "dispatching walk");

    let bytes = walk(state.backend.as_ref(), &ObjectId::new(start), path, &residual).await?;
    Ok(bytes.into_response())
}

/// Strip one trailing slash, unless the path is just `/`.
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    }
}
