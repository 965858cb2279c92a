//! Axum middleware for the X-Forwarded-For filter.
//!
//! For routers composed with `axum::middleware::from_fn_with_state`
//! instead of a tower layer.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::filter::{ConvertXff, RequestFilter};

/// Rewrite `X-Forwarded-For`, then run the rest of the stack.
pub async fn convert_xff_middleware(
    State(filter): State<ConvertXff>,
    request: Request<Body>,
    next: Next,
) -> Response {
    filter.handle(request, |request| next.run(request)).await
}
