//! HTTP request filtering subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (from host pipeline)
//!     → layer.rs / middleware.rs (tower or axum entry point)
//!     → filter.rs (rewrite X-Forwarded-For in place)
//!     → next handler (called exactly once)
//!     → response returned unchanged
//! ```

pub mod filter;
pub mod layer;
pub mod middleware;

pub use filter::{ConvertXff, RequestFilter};
pub use layer::{ConvertXffLayer, ConvertXffService};
pub use middleware::convert_xff_middleware;
