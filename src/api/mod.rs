//! HTTP API for the directory

pub mod handlers;
pub mod investor_handlers;
pub mod query;
pub mod routes;
pub mod startup_handlers;

pub use query::*;
pub use routes::create_router;
