//! Static menu catalog

use crate::core::order::{Crust, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Price and slice count for one pizza size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSize {
    /// Price in cents
    pub price: u32,
    pub slices: u8,
}

/// Read-only catalog of available sizes, toppings and crusts
///
/// Built once at startup and never mutated at runtime. Size entries keep
/// declaration order (small, medium, large) in serialized responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub sizes: IndexMap<String, MenuSize>,
    pub toppings: Vec<String>,
    pub crusts: Vec<String>,
}

impl Menu {
    /// The standard catalog served by the API
    pub fn default_menu() -> Self {
        let mut sizes = IndexMap::new();
        sizes.insert(Size::Small.to_string(), MenuSize { price: 599, slices: 6 });
        sizes.insert(Size::Medium.to_string(), MenuSize { price: 899, slices: 8 });
        sizes.insert(Size::Large.to_string(), MenuSize { price: 1299, slices: 12 });

        Self {
            sizes,
            toppings: [
                "pepperoni",
                "mushrooms",
                "onions",
                "sausage",
                "bacon",
                "extra cheese",
                "black olives",
                "green peppers",
                "pineapple",
                "spinach",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            crusts: Crust::ALL.iter().map(Crust::to_string).collect(),
        }
    }

    pub fn has_size(&self, name: &str) -> bool {
        self.sizes.contains_key(name)
    }

    pub fn has_crust(&self, name: &str) -> bool {
        self.crusts.iter().any(|c| c == name)
    }

    /// Size names in declaration order, for validation messages
    pub fn size_names(&self) -> Vec<&str> {
        self.sizes.keys().map(String::as_str).collect()
    }

    pub fn crust_names(&self) -> Vec<&str> {
        self.crusts.iter().map(String::as_str).collect()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::default_menu()
    }
}
