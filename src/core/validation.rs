//! Creation input validation
//!
//! All field checks run before any Order is constructed, and every violation
//! is collected so the client sees the full list in one response.

use crate::core::error::{ApiError, ApiResult, FieldError};
use crate::core::menu::Menu;
use crate::core::order::{CreateOrderRequest, Crust, Size};

/// A creation input that passed validation
///
/// `size` and `crust` are resolved against the menu catalogs; the contact
/// fields are trimmed and known non-empty. Toppings pass through unchanged:
/// membership in the menu topping list is deliberately not enforced.
#[derive(Debug, Clone)]
pub struct ValidOrder {
    pub size: Size,
    pub toppings: Vec<String>,
    pub crust: Crust,
    pub customer_name: String,
    pub delivery_address: String,
    pub phone: String,
}

/// Validate a candidate order against the menu catalogs
pub fn validate_create(menu: &Menu, req: CreateOrderRequest) -> ApiResult<ValidOrder> {
    let mut errors = Vec::new();

    let size_raw = req.size.trim();
    let size = match Size::parse(size_raw) {
        Some(size) if menu.has_size(size.as_str()) => Some(size),
        _ => {
            errors.push(FieldError::new(
                "size",
                format!(
                    "must be one of [{}] (got '{}')",
                    menu.size_names().join(", "),
                    req.size
                ),
            ));
            None
        }
    };

    let crust_raw = req.crust.trim();
    let crust = match Crust::parse(crust_raw) {
        Some(crust) if menu.has_crust(crust.as_str()) => Some(crust),
        _ => {
            errors.push(FieldError::new(
                "crust",
                format!(
                    "must be one of [{}] (got '{}')",
                    menu.crust_names().join(", "),
                    req.crust
                ),
            ));
            None
        }
    };

    let customer_name = required_text("customer_name", &req.customer_name, &mut errors);
    let delivery_address = required_text("delivery_address", &req.delivery_address, &mut errors);
    let phone = required_text("phone", &req.phone, &mut errors);

    match (size, crust, customer_name, delivery_address, phone) {
        (Some(size), Some(crust), Some(customer_name), Some(delivery_address), Some(phone))
            if errors.is_empty() =>
        {
            Ok(ValidOrder {
                size,
                toppings: req.toppings,
                crust,
                customer_name,
                delivery_address,
                phone,
            })
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Trimmed non-empty text field
fn required_text(field: &str, value: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
        None
    } else {
        Some(trimmed.to_string())
    }
}
