//! Materials server - inventory and supplier tracking over HTTP
//!
//! Two independent collections (inventory items and suppliers) stored in a
//! single SQLite file and exposed as JSON CRUD endpoints under `/api`.

pub mod app;
pub mod config;
pub mod http;
pub mod store;

pub use app::AppState;
pub use config::Config;
pub use http::build_router;
