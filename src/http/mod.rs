//! HTTP surface of the faucet.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs (validate, call chain, map result)
//!     → response.rs (JSON shapes, error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{app, AppState, HttpServer};
