//! HTTP surface: handlers, route table, and the server builder

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::{AppState, SERVICE_NAME};
pub use router::build_router;
