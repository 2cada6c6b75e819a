use contracts::domain::a001_store::{StoreInfo, StoreInfoPayload, UpdateStoreRequest};
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{endpoint, get_json, post_json_no_content};
use crate::shared::config::ApiConfig;

/// Fetch the store row of the signed-in owner
pub async fn fetch_store(api: &ApiConfig, store_id: &str) -> Result<StoreInfo, ApiError> {
    let url = endpoint(
        &api.store_info_base,
        &format!("getInfoFromStore/{}", urlencoding::encode(store_id)),
    );
    let payload: StoreInfoPayload = get_json(&url).await?;
    Ok(payload.into_row())
}

/// Persist location, hours and coordinates
pub async fn update_store(api: &ApiConfig, request: &UpdateStoreRequest) -> Result<(), ApiError> {
    let url = endpoint(&api.store_update_base, "updateStoreLocationAndStoreHours");
    post_json_no_content(&url, request).await
}
