use serde::{Deserialize, Serialize};

use super::location::{Coordinates, StoreAddress};
use super::store_hours::StoreHours;
use crate::shared::serde_utils::string_or_number;

/// Store row as returned by `getInfoFromStore`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default, deserialize_with = "string_or_number")]
    pub store_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub store_hours: String,
    #[serde(default)]
    pub store_coordinates: String,
}

impl StoreInfo {
    pub fn address(&self) -> StoreAddress {
        StoreAddress::parse(&self.location)
    }

    pub fn hours(&self) -> StoreHours {
        StoreHours::parse(&self.store_hours)
    }

    /// Apply a successful update locally
    pub fn apply_update(&mut self, request: &UpdateStoreRequest) {
        self.location = request.location.clone();
        self.store_hours = request.store_hours.clone();
        self.store_coordinates = request.coordinates.clone();
    }
}

/// The endpoint answers either with the row itself or with a one-row array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoreInfoPayload {
    Rows(Vec<StoreInfo>),
    Row(StoreInfo),
}

impl StoreInfoPayload {
    /// First row, or an empty row when the array is empty
    pub fn into_row(self) -> StoreInfo {
        match self {
            StoreInfoPayload::Row(row) => row,
            StoreInfoPayload::Rows(rows) => rows.into_iter().next().unwrap_or_default(),
        }
    }
}

/// Body of `updateStoreLocationAndStoreHours`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStoreRequest {
    pub store_id: String,
    pub location: String,
    #[serde(rename = "storeHours")]
    pub store_hours: String,
    pub coordinates: String,
}

impl UpdateStoreRequest {
    pub fn new(
        store_id: impl Into<String>,
        address: &StoreAddress,
        hours: &StoreHours,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            location: address.format(),
            store_hours: hours.format(),
            coordinates: coordinates.to_string(),
        }
    }
}
