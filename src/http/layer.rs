//! Tower integration for the X-Forwarded-For filter.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::config::ConvertXffConfig;
use crate::http::filter::{ConvertXff, RequestFilter};

/// Layer that wraps a service with [`ConvertXffService`].
#[derive(Debug, Clone)]
pub struct ConvertXffLayer {
    filter: ConvertXff,
}

impl ConvertXffLayer {
    /// Create a layer around a new [`ConvertXff`] filter.
    pub fn new(config: &ConvertXffConfig, name: impl Into<Arc<str>>) -> Self {
        Self {
            filter: ConvertXff::new(config, name),
        }
    }
}

impl From<ConvertXff> for ConvertXffLayer {
    fn from(filter: ConvertXff) -> Self {
        Self { filter }
    }
}

impl<S> Layer<S> for ConvertXffLayer {
    type Service = ConvertXffService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ConvertXffService {
            inner,
            filter: self.filter.clone(),
        }
    }
}

/// Rewrites `X-Forwarded-For` and forwards to the inner service.
///
/// Readiness, response and errors of the inner service pass through untouched.
#[derive(Debug, Clone)]
pub struct ConvertXffService<S> {
    inner: S,
    filter: ConvertXff,
}

impl<S> ConvertXffService<S> {
    /// Wrap `inner` with `filter`.
    pub fn new(inner: S, filter: ConvertXff) -> Self {
        Self { inner, filter }
    }
}

impl<S, B> Service<Request<B>> for ConvertXffService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let inner = &mut self.inner;
        self.filter.handle(request, |request| inner.call(request))
    }
}
