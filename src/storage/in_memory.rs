//! In-memory order store
//!
//! The only backend shipped with the service. State lives for the process
//! lifetime; nothing is persisted across restarts.

use super::OrderStore;
use crate::core::error::{ApiError, ApiResult};
use crate::core::order::{ESTIMATED_DELIVERY, Order, OrderStatus};
use crate::core::validation::ValidOrder;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory order store
///
/// Uses an RwLock for thread-safe access; the IndexMap keeps insertion order
/// so `list` returns orders in creation order without a secondary index.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    orders: IndexMap<Uuid, Order>,
    last_created_at: Option<DateTime<Utc>>,
}

impl InMemoryOrderStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, input: ValidOrder) -> ApiResult<Order> {
        let mut state = self
            .inner
            .write()
            .map_err(|e| ApiError::Internal(format!("order store lock poisoned: {e}")))?;

        // The clock is read under the write lock and clamped to the previous
        // creation time, so created_at never decreases with insertion order.
        let now = Utc::now();
        let created_at = match state.last_created_at {
            Some(prev) if prev > now => prev,
            _ => now,
        };
        state.last_created_at = Some(created_at);

        let order = Order {
            id: Uuid::new_v4(),
            size: input.size,
            toppings: input.toppings,
            crust: input.crust,
            customer_name: input.customer_name,
            delivery_address: input.delivery_address,
            phone: input.phone,
            status: OrderStatus::Pending,
            created_at,
            estimated_delivery: ESTIMATED_DELIVERY.to_string(),
        };

        state.orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: &Uuid) -> ApiResult<Option<Order>> {
        let state = self
            .inner
            .read()
            .map_err(|e| ApiError::Internal(format!("order store lock poisoned: {e}")))?;

        Ok(state.orders.get(id).cloned())
    }

    async fn list(&self) -> ApiResult<Vec<Order>> {
        let state = self
            .inner
            .read()
            .map_err(|e| ApiError::Internal(format!("order store lock poisoned: {e}")))?;

        Ok(state.orders.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::{Crust, Size};

    fn valid_order(name: &str) -> ValidOrder {
        ValidOrder {
            size: Size::Large,
            toppings: vec!["mushrooms".to_string()],
            crust: Crust::Thin,
            customer_name: name.to_string(),
            delivery_address: "3 Dock Rd".to_string(),
            phone: "555-0102".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_populates_generated_fields() {
        let store = InMemoryOrderStore::new();
        let order = store.create(valid_order("Ada")).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.estimated_delivery, ESTIMATED_DELIVERY);
        assert_eq!(order.customer_name, "Ada");
    }

    #[tokio::test]
    async fn test_get_returns_created_record() {
        let store = InMemoryOrderStore::new();
        let created = store.create(valid_order("Ada")).await.unwrap();

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = InMemoryOrderStore::new();
        assert_eq!(store.get(&Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryOrderStore::new();
        let first = store.create(valid_order("first")).await.unwrap();
        let second = store.create(valid_order("second")).await.unwrap();
        let third = store.create(valid_order("third")).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let store = InMemoryOrderStore::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..50 {
            let order = store.create(valid_order(&format!("c{i}"))).await.unwrap();
            assert!(seen.insert(order.id), "id {} issued twice", order.id);
        }
    }

    #[tokio::test]
    async fn test_created_at_non_decreasing() {
        let store = InMemoryOrderStore::new();
        let mut prev = None;
        for i in 0..20 {
            let order = store.create(valid_order(&format!("c{i}"))).await.unwrap();
            if let Some(prev) = prev {
                assert!(order.created_at >= prev);
            }
            prev = Some(order.created_at);
        }
    }

    #[tokio::test]
    async fn test_concurrent_creates_all_visible() {
        let store = InMemoryOrderStore::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(valid_order(&format!("c{i}"))).await.unwrap().id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(store.list().await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryOrderStore::new();
        let clone = store.clone();
        store.create(valid_order("Ada")).await.unwrap();
        assert_eq!(clone.list().await.unwrap().len(), 1);
    }
}
