//! HTTP facade subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (deserialize, delegate to contract gateway)
//!     → response.rs (map gateway failures to HTTP 500 + detail)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
