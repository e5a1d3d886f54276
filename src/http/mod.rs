//! HTTP surface

pub mod extract;
pub mod routes;
pub mod static_files;

pub use routes::{build_router, AppError};
