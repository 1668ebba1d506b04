//! Order storage backends

pub mod in_memory;

pub use in_memory::InMemoryOrderStore;

use crate::core::error::ApiResult;
use crate::core::order::Order;
use crate::core::validation::ValidOrder;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage seam for orders
///
/// Handlers depend on this trait rather than a concrete store, so tests can
/// construct isolated instances and a persistent backend can be substituted
/// later without touching the HTTP surface.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a validated order
    ///
    /// Id assignment, timestamping and insertion happen atomically: two
    /// concurrent creates never share an id, and the returned record is
    /// exactly what later reads observe.
    async fn create(&self, input: ValidOrder) -> ApiResult<Order>;

    /// Fetch one order by id, `None` if it was never issued
    async fn get(&self, id: &Uuid) -> ApiResult<Option<Order>>;

    /// All orders in insertion order
    async fn list(&self) -> ApiResult<Vec<Order>>;
}
