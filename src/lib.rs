//! X-Forwarded-For normalizer.
//!
//! Rewrites the `X-Forwarded-For` header of inbound requests into a
//! canonical comma-separated address list before handing the request to
//! the next handler: IPv6 literal brackets are removed and IPv4-mapped
//! IPv6 addresses (`::ffff:a.b.c.d`) become plain dotted-decimal IPv4.
//!
//! ```text
//! "[::ffff:2a5b:3cde], ::ffff:2a6b:3cde, 1.2.3.4"
//!     → "42.91.60.222,42.107.60.222,1.2.3.4"
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod xff;

pub use config::ConvertXffConfig;
pub use http::{convert_xff_middleware, ConvertXff, ConvertXffLayer, ConvertXffService, RequestFilter};
