//! Alsvid Dashboard - Local web interface for QFT circuit construction.
//!
//! This crate serves a small web front-end over the synthesis and render
//! crates: enter a qubit count, get the Quantum Fourier Transform circuit
//! back as an inline image and a text diagram.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use alsvid_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DashboardConfig::default();
//!     let state = Arc::new(AppState::with_config(config.clone()));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{HealthResponse, QftCircuitResponse, QftRequest};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, DashboardConfig};
