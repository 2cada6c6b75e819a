use contracts::domain::a003_delivery::nearby::sort_newest_first;
use contracts::domain::a003_delivery::{
    AssignDeliveryRequest, Delivery, DeliveryPerson, DeliveryPersonPatch, NewDeliveryPerson,
};
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{endpoint, get_json, post_json, put_json};
use crate::shared::config::ApiConfig;

/// Deliveries still waiting for a driver, newest first
pub async fn fetch_available(api: &ApiConfig) -> Result<Vec<Delivery>, ApiError> {
    let url = endpoint(&api.deliveries_base, "deliveries?status=available");
    let mut deliveries: Vec<Delivery> = get_json(&url).await?;
    sort_newest_first(&mut deliveries);
    Ok(deliveries)
}

/// Driver record created by `email`, if any
pub async fn fetch_driver(api: &ApiConfig, email: &str) -> Result<Option<DeliveryPerson>, ApiError> {
    let url = endpoint(
        &api.deliveries_base,
        &format!("delivery-persons?created_by={}", urlencoding::encode(email)),
    );
    let drivers: Vec<DeliveryPerson> = get_json(&url).await?;
    Ok(drivers.into_iter().next())
}

pub async fn create_driver(
    api: &ApiConfig,
    driver: &NewDeliveryPerson,
) -> Result<DeliveryPerson, ApiError> {
    let url = endpoint(&api.deliveries_base, "delivery-persons");
    post_json(&url, driver).await
}

pub async fn update_driver(
    api: &ApiConfig,
    id: &str,
    patch: &DeliveryPersonPatch,
) -> Result<(), ApiError> {
    let url = endpoint(
        &api.deliveries_base,
        &format!("delivery-persons/{}", urlencoding::encode(id)),
    );
    put_json(&url, patch).await
}

pub async fn assign(
    api: &ApiConfig,
    delivery_id: &str,
    request: &AssignDeliveryRequest,
) -> Result<(), ApiError> {
    let url = endpoint(
        &api.deliveries_base,
        &format!("deliveries/{}", urlencoding::encode(delivery_id)),
    );
    put_json(&url, request).await
}
