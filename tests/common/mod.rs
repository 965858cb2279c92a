//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::{
    http::HeaderMap,
    routing::any,
    Router,
};
use convert_xff::xff::X_FORWARDED_FOR;
use tokio::net::TcpListener;

/// Header carrying the number of `X-Forwarded-For` instances the handler saw.
pub const XFF_COUNT: &str = "x-xff-count";

/// Echo handler: body is every `X-Forwarded-For` value joined with `|`.
pub async fn echo_xff(headers: HeaderMap) -> ([(&'static str, String); 1], String) {
    let values: Vec<String> = headers
        .get_all(X_FORWARDED_FOR)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();

    ([(XFF_COUNT, values.len().to_string())], values.join("|"))
}

/// Router with the echo handler on every path.
pub fn echo_router() -> Router {
    Router::new()
        .route("/", any(echo_xff))
        .route("/{*path}", any(echo_xff))
}

/// Serve `app` on an ephemeral local port and return its address.
#[allow(dead_code)]
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Install a test subscriber once; later calls are no-ops.
pub fn init_logging() {
    let _ = convert_xff::observability::logging::init_logging("convert_xff=debug");
}
