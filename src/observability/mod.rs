//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http filter produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (rewrite and token counters)
//!
//! Consumers:
//!     → whatever subscriber / recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library emits events; it never installs a global recorder itself
//! - `init_logging` is offered for hosts and tests that want the default setup

pub mod logging;
pub mod metrics;
