//! Test-network token faucet.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────────────────┐
//!     ─────────────────────────▶│  http (axum router + handlers)               │
//!                               │      │ validate address / amounts            │
//!                               │      ▼                                       │
//!                               │  chain::address (bech32 checks)              │
//!                               │      │                                       │
//!                               │      ▼                                       │
//!                               │  chain::stargate (sign, simulate, broadcast) │
//!                               │      │                                       │
//!                               │      ▼                                       │
//!     Client Response ◀─────────│  chain::lcd (node REST API)                  │──▶ Node
//!                               │                                              │
//!                               │  cross-cutting: config, observability        │
//!                               └──────────────────────────────────────────────┘
//! ```

pub mod chain;
pub mod config;
pub mod http;
pub mod observability;

pub use chain::{Chain, StargateChain};
pub use config::FaucetConfig;
pub use http::HttpServer;
