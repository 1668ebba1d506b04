//! Order entity and creation request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed delivery estimate shown on every order
pub const ESTIMATED_DELIVERY: &str = "30-45 minutes";

/// Pizza size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Parse a size name as it appears on the wire
    pub fn parse(s: &str) -> Option<Size> {
        match s {
            "small" => Some(Size::Small),
            "medium" => Some(Size::Medium),
            "large" => Some(Size::Large),
            _ => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pizza crust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Crust {
    Thin,
    Thick,
    Stuffed,
    GlutenFree,
}

impl Crust {
    pub const ALL: [Crust; 4] = [Crust::Thin, Crust::Thick, Crust::Stuffed, Crust::GlutenFree];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crust::Thin => "thin",
            Crust::Thick => "thick",
            Crust::Stuffed => "stuffed",
            Crust::GlutenFree => "gluten-free",
        }
    }

    /// Parse a crust name as it appears on the wire
    pub fn parse(s: &str) -> Option<Crust> {
        match s {
            "thin" => Some(Crust::Thin),
            "thick" => Some(Crust::Thick),
            "stuffed" => Some(Crust::Stuffed),
            "gluten-free" => Some(Crust::GlutenFree),
            _ => None,
        }
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order status
///
/// Orders are always `pending` in this model; no fulfillment workflow is
/// defined, so no transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("pending"),
        }
    }
}

/// A stored order
///
/// All fields are immutable after creation; there is no update or delete
/// operation. `created_at` is assigned under the store's write lock and never
/// decreases with insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub size: Size,
    pub toppings: Vec<String>,
    pub crust: Crust,
    pub customer_name: String,
    pub delivery_address: String,
    pub phone: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: String,
}

/// Candidate order as submitted by the client, before validation
///
/// Every field defaults so that missing keys surface as per-field validation
/// errors instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub toppings: Vec<String>,
    #[serde(default)]
    pub crust: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub phone: String,
}
