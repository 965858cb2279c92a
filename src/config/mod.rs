//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → ConvertXffConfig (immutable)
//!     → handed to ConvertXff::new / ConvertXffLayer::new
//! ```
//!
//! # Design Decisions
//! - The filter recognizes no options; the config exists so hosts can pass
//!   one through their usual plugin wiring
//! - Unknown keys are ignored, so any table is accepted

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{create_config, ConvertXffConfig};
