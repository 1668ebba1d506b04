//! # pizza-api
//!
//! A small in-memory order management service for a pizza delivery shop,
//! exposed as a RESTful API.
//!
//! ## Features
//!
//! - **Order tracking**: submit an order, fetch it back by id, list all
//!   orders in creation order
//! - **Static menu**: sizes with prices and slice counts, topping and crust
//!   catalogs
//! - **Typed validation**: size and crust resolved against the menu, contact
//!   fields checked non-empty, all violations reported together per field
//! - **Injected store**: handlers depend on the [`storage::OrderStore`] trait,
//!   so tests build isolated instances and a persistent backend can be
//!   swapped in later
//!
//! State lives for the process lifetime only; there is no persistence and no
//! order lifecycle beyond `pending`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pizza_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryOrderStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::ServiceConfig;
    pub use crate::core::error::{ApiError, ApiResult, ConfigError, ErrorResponse, FieldError};
    pub use crate::core::menu::{Menu, MenuSize};
    pub use crate::core::order::{
        CreateOrderRequest, Crust, ESTIMATED_DELIVERY, Order, OrderStatus, Size,
    };
    pub use crate::core::validation::{ValidOrder, validate_create};
    pub use crate::server::{AppState, SERVICE_NAME, ServerBuilder, build_router};
    pub use crate::storage::{InMemoryOrderStore, OrderStore};
}
