//! HTTP handlers for the five service operations

use crate::core::error::{ApiError, ApiResult};
use crate::core::menu::Menu;
use crate::core::order::{CreateOrderRequest, Order};
use crate::core::validation::validate_create;
use crate::storage::OrderStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "pizza-api";

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    pub menu: Arc<Menu>,
}

impl AppState {
    pub fn new(store: impl OrderStore + 'static, menu: Menu) -> Self {
        Self {
            store: Arc::new(store),
            menu: Arc::new(menu),
        }
    }
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}

/// GET /menu
pub async fn get_menu(State(state): State<AppState>) -> Json<Menu> {
    Json(state.menu.as_ref().clone())
}

/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let orders = state.store.list().await?;
    Ok(Json(json!({
        "orders": orders,
        "count": orders.len()
    })))
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Order>> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::InvalidOrderId { value: id.clone() })?;

    state
        .store
        .get(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::OrderNotFound { id })
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let input = validate_create(&state.menu, payload)?;
    let order = state.store.create(input).await?;

    tracing::debug!(order_id = %order.id, customer = %order.customer_name, "order created");

    Ok((StatusCode::CREATED, Json(order)))
}
