//! The X-Forwarded-For request filter.
//!
//! # Responsibilities
//! - Read the first `X-Forwarded-For` value (absent = empty)
//! - Drop every existing instance of the header
//! - Append exactly one rewritten value
//! - Hand the request to the next stage, once
//!
//! # Design Decisions
//! - Fail open: nothing here can reject or error a request
//! - Only the one header is touched; method, URI, body and the
//!   other headers are left alone
//! - No state is shared between calls

use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue, Request};

use crate::config::ConvertXffConfig;
use crate::observability::metrics;
use crate::xff::{self, X_FORWARDED_FOR};

/// A chainable request filter.
pub trait RequestFilter {
    /// Mutate `request` and pass it to `next`, returning whatever `next` returns.
    fn handle<B, N, R>(&self, request: Request<B>, next: N) -> R
    where
        N: FnOnce(Request<B>) -> R;
}

/// Rewrites `X-Forwarded-For` into a canonical, comma-joined address list.
#[derive(Debug, Clone)]
pub struct ConvertXff {
    name: Arc<str>,
}

impl ConvertXff {
    /// Create a filter instance. Never fails; the config carries no options.
    pub fn new(_config: &ConvertXffConfig, name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// Instance name used in log and metric labels.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rewrite the header in place.
    pub fn rewrite_headers(&self, headers: &mut HeaderMap) {
        let original = headers.remove(X_FORWARDED_FOR);
        let raw = original.as_ref().map(HeaderValue::as_bytes).unwrap_or_default();

        let rewrite = xff::rewrite(raw);
        tracing::debug!(
            filter = %self.name,
            original = %String::from_utf8_lossy(raw),
            rewritten = %String::from_utf8_lossy(&rewrite.value),
            tokens = rewrite.tokens,
            unmapped = rewrite.unmapped,
            unparsed = rewrite.unparsed,
            "Rewrote X-Forwarded-For"
        );
        metrics::record_rewrite(&self.name, &rewrite);

        // Output bytes are input bytes minus brackets and whitespace, plus
        // address text, so they always form a valid header value.
        if let Ok(value) = HeaderValue::from_bytes(&rewrite.value) {
            headers.append(X_FORWARDED_FOR, value);
        }
    }

    /// Rewrite the header on a request in place.
    pub fn rewrite_request<B>(&self, request: &mut Request<B>) {
        self.rewrite_headers(request.headers_mut());
    }
}

impl RequestFilter for ConvertXff {
    fn handle<B, N, R>(&self, mut request: Request<B>, next: N) -> R
    where
        N: FnOnce(Request<B>) -> R,
    {
        self.rewrite_request(&mut request);
        next(request)
    }
}
