use contracts::domain::a001_store::{
    BoundingBox, StoreAddress, StoreHours, StoreInfo, UpdateStoreRequest,
};
use contracts::shared::error::ApiError;

use crate::domain::a001_store::api;
use crate::shared::config::AppConfig;
use crate::shared::geocoding;

pub async fn fetch_store(config: &AppConfig, store_id: &str) -> Result<StoreInfo, ApiError> {
    api::fetch_store(&config.api, store_id).await
}

/// Validate the address against the geocoder, then save.
/// Returns the request that was stored so the caller can update its row.
pub async fn save_store(
    config: &AppConfig,
    store_id: &str,
    address: &StoreAddress,
    hours: &StoreHours,
) -> Result<UpdateStoreRequest, ApiError> {
    let location = address.format();
    let coordinates = geocoding::forward(&config.geocoding, &location).await?;

    if !BoundingBox::ISRAEL.contains(coordinates) {
        return Err(ApiError::Validation("out of israel".into()));
    }
    if !geocoding::is_in_country(&config.geocoding, coordinates).await {
        return Err(ApiError::Validation("address is outside from israel".into()));
    }

    let request = UpdateStoreRequest::new(store_id, address, hours, coordinates);
    api::update_store(&config.api, &request).await?;
    Ok(request)
}
