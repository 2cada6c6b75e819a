use contracts::domain::a002_order::OrdersResponse;
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{endpoint, get_json};
use crate::shared::config::ApiConfig;

/// Current orders of a store. `orders` is absent when there are none.
pub async fn fetch_orders(api: &ApiConfig, store_id: &str) -> Result<OrdersResponse, ApiError> {
    let url = endpoint(
        &api.orders_base,
        &format!("getAllOrdersFromStore/{}", urlencoding::encode(store_id)),
    );
    get_json(&url).await
}
