//! Which deliveries a driver sees, and the summary above the list.

use super::aggregate::{Delivery, DeliveryPerson, DeliveryPersonPatch, DeliveryPriority};
use crate::domain::a001_store::location::Coordinates;

/// Mean Earth radius
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Deliveries farther than this from the driver are hidden
pub const NEARBY_RADIUS_KM: f64 = 15.0;

/// Great-circle distance (haversine)
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Urgent,
    High,
}

impl PriorityFilter {
    pub const ALL: [PriorityFilter; 3] = [PriorityFilter::All, PriorityFilter::Urgent, PriorityFilter::High];

    pub fn matches(&self, priority: DeliveryPriority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Urgent => priority == DeliveryPriority::Urgent,
            PriorityFilter::High => priority == DeliveryPriority::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::Urgent => "Urgent",
            PriorityFilter::High => "High",
        }
    }
}

impl Delivery {
    pub fn pickup(&self) -> Coordinates {
        Coordinates::new(self.pickup_lat, self.pickup_lng)
    }

    /// Distance from the driver, 0 while the driver position is unknown
    pub fn distance_from(&self, driver: Option<Coordinates>) -> f64 {
        driver.map(|d| distance_km(d, self.pickup())).unwrap_or(0.0)
    }
}

impl DeliveryPerson {
    /// Last reported position, if both coordinates are known
    pub fn position(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.current_lat?, self.current_lng?))
    }
}

impl DeliveryPersonPatch {
    pub fn moved_to(position: Coordinates) -> Self {
        Self {
            current_lat: Some(position.lat),
            current_lng: Some(position.lng),
            ..Default::default()
        }
    }

    /// Append `delivery_id` to the driver's active deliveries
    pub fn accepting(person: &DeliveryPerson, delivery_id: &str) -> Self {
        let mut active = person.active_deliveries.clone();
        active.push(delivery_id.to_string());
        Self {
            active_deliveries: Some(active),
            ..Default::default()
        }
    }
}

/// Apply the priority filter, then the radius filter when the driver
/// position is known
pub fn visible_deliveries<'a>(
    deliveries: &'a [Delivery],
    filter: PriorityFilter,
    driver: Option<Coordinates>,
) -> Vec<&'a Delivery> {
    deliveries
        .iter()
        .filter(|d| filter.matches(d.priority))
        .filter(|d| match driver {
            Some(position) => distance_km(position, d.pickup()) <= NEARBY_RADIUS_KM,
            None => true,
        })
        .collect()
}

/// Newest first; undated deliveries go last
pub fn sort_newest_first(deliveries: &mut [Delivery]) {
    deliveries.sort_by(|a, b| b.created_date.cmp(&a.created_date));
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeliveryStats {
    pub total: usize,
    pub high_priority: usize,
    pub potential_earnings: f64,
}

impl DeliveryStats {
    pub fn of(deliveries: &[&Delivery]) -> Self {
        Self {
            total: deliveries.len(),
            high_priority: deliveries.iter().filter(|d| d.priority.is_high()).count(),
            potential_earnings: deliveries.iter().map(|d| d.delivery_fee).sum(),
        }
    }
}
