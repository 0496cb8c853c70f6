#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod http;
pub mod infra;
pub mod repos;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use auth::gate::authenticate;
pub use auth::token::{issue, unix_now, verify, TOKEN_TTL_SECS};
pub use config::db::{db_url, DbOwner, DbProfile};
pub use error::AppError;
pub use http::router::{ApiRequest, ApiResponse, HandlerCtx, Router};
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
