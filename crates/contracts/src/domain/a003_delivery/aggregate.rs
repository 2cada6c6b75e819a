use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::{number_or_string, string_or_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl DeliveryPriority {
    pub fn is_high(&self) -> bool {
        match self {
            DeliveryPriority::High | DeliveryPriority::Urgent => true,
            DeliveryPriority::Low | DeliveryPriority::Normal => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryPriority::Low => "Low",
            DeliveryPriority::Normal => "Normal",
            DeliveryPriority::High => "High",
            DeliveryPriority::Urgent => "Urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Available,
    Assigned,
    PickedUp,
    Delivered,
}

/// Delivery job offered to drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub dropoff_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    #[serde(default)]
    pub priority: DeliveryPriority,
    #[serde(default, deserialize_with = "number_or_string")]
    pub delivery_fee: f64,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// Driver record, one per signed-in driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPerson {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub current_lat: Option<f64>,
    #[serde(default)]
    pub current_lng: Option<f64>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub active_deliveries: Vec<String>,
    #[serde(default)]
    pub created_by: String,
}

/// Body for creating a driver record on the first location fix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDeliveryPerson {
    pub current_lat: f64,
    pub current_lng: f64,
    pub phone: String,
    pub vehicle_type: String,
    pub created_by: String,
}

impl NewDeliveryPerson {
    pub const DEFAULT_VEHICLE: &'static str = "motorcycle";
}

/// Partial update of a driver record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryPersonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_deliveries: Option<Vec<String>>,
}

/// Body for taking a delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignDeliveryRequest {
    pub status: DeliveryStatus,
    pub assigned_to: String,
}

impl AssignDeliveryRequest {
    pub fn to(driver: impl Into<String>) -> Self {
        Self {
            status: DeliveryStatus::Assigned,
            assigned_to: driver.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_from_json() {
        let json = r#"{
            "id": 5,
            "pickup_address": "Herzl 1, Haifa",
            "pickup_lat": 32.8,
            "pickup_lng": 35.0,
            "priority": "urgent",
            "delivery_fee": "18",
            "created_date": "2024-05-01T10:00:00Z"
        }"#;
        let delivery: Delivery = serde_json::from_str(json).unwrap();
        assert_eq!(delivery.id, "5");
        assert_eq!(delivery.priority, DeliveryPriority::Urgent);
        assert_eq!(delivery.delivery_fee, 18.0);
        assert_eq!(delivery.status, DeliveryStatus::Available);
        assert!(delivery.created_date.is_some());
    }

    #[test]
    fn test_assign_request_wire_form() {
        let value = serde_json::to_value(AssignDeliveryRequest::to("d@example.com")).unwrap();
        assert_eq!(value["status"], "assigned");
        assert_eq!(value["assigned_to"], "d@example.com");
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = DeliveryPersonPatch {
            active_deliveries: Some(vec!["5".into()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"active_deliveries":["5"]}"#
        );
    }

    #[test]
    fn test_priority_is_high() {
        assert!(DeliveryPriority::Urgent.is_high());
        assert!(DeliveryPriority::High.is_high());
        assert!(!DeliveryPriority::Normal.is_high());
    }
}
