//! Core domain types: orders, the menu catalog, validation, and errors

pub mod error;
pub mod menu;
pub mod order;
pub mod validation;

pub use error::{ApiError, ApiResult, ConfigError, ErrorResponse, FieldError};
pub use menu::{Menu, MenuSize};
pub use order::{CreateOrderRequest, Crust, ESTIMATED_DELIVERY, Order, OrderStatus, Size};
pub use validation::{ValidOrder, validate_create};
