//! X-Forwarded-For normalization subsystem.
//!
//! # Data Flow
//! ```text
//! raw header value
//!     → normalize.rs (strip brackets, split on commas)
//!     → normalize.rs (unmap ::ffff tokens, keep everything else)
//!     → comma-joined canonical address list
//! ```
//!
//! # Design Decisions
//! - Pure string transformation: no state, no I/O, no locks
//! - Fail open: a token that does not parse is kept as written
//! - Brackets are removed from the whole value before splitting

use axum::http::HeaderName;

pub mod normalize;

pub use normalize::{normalize_value, rewrite, split_tokens, strip_brackets, NormalizedToken, Rewrite};

/// Header name as it appears on the wire.
pub const XFF: &str = "X-Forwarded-For";

/// Typed header name for `HeaderMap` access.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Prefix that marks a token as a candidate for IPv4 unmapping.
pub const MAPPED_PREFIX: &str = "::ffff";
