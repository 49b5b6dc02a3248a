//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! faucet.toml
//!     → loader.rs (read, parse)
//!     → validation.rs (semantic checks, all errors reported)
//!     → schema.rs types, shared read-only behind Arc
//! ```
//!
//! # Design Decisions
//! - Loaded exactly once at startup; never mutated afterwards
//! - Handlers receive the config by injection, never through a global

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ChainConfig, FaucetConfig, GrantConfig, ObservabilityConfig, ServerConfig};
