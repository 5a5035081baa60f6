//! dynform server - HTTP endpoint persisting form submissions
//!
//! Accepts `{"fields": {header: value}}` bodies and appends each one to a
//! single JSON document on disk. Appends are serialized, so concurrent
//! submissions never overwrite each other.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (submission document readable)
//! - `GET /metrics` - Prometheus metrics
//! - `POST /submit-form` - Store one submission
//! - `GET /api/v1/submissions` - List stored submissions
//! - `GET /api/v1/metadata` - Server metadata

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
