//! Static host for the compiled client bundle.
//!
//! The `dx build` output in `dist/` is embedded into the binary. Client
//! routes have no file extension and fall back to `index.html` so the
//! router can take over in the browser.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use rust_embed::RustEmbed;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
struct Assets;

const INDEX: &str = "index.html";

/// Build the host router.
pub fn router() -> Router {
    Router::new()
        .fallback(serve_asset)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Whether the client bundle was embedded at build time.
pub fn has_bundle() -> bool {
    Assets::get(INDEX).is_some()
}

async fn serve_asset(uri: Uri) -> Response {
    let path = asset_path(uri.path());
    match Assets::get(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], file.data).into_response()
        }
        None => {
            debug!(%path, "Asset not found");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Map a request path to an embedded file name.
pub fn asset_path(request_path: &str) -> String {
    let trimmed = request_path.trim_start_matches('/');
    let last_segment = trimmed.rsplit('/').next().unwrap_or_default();
    if last_segment.contains('.') {
        trimmed.to_string()
    } else {
        INDEX.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[test]
    fn test_client_routes_fall_back_to_index() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path("/about"), "index.html");
        assert_eq!(asset_path("/contact"), "index.html");
        assert_eq!(asset_path(""), "index.html");
    }

    #[test]
    fn test_asset_paths_pass_through() {
        assert_eq!(asset_path("/assets/app.wasm"), "assets/app.wasm");
        assert_eq!(asset_path("/favicon.ico"), "favicon.ico");
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/assets/does-not-exist.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
