pub mod aggregate;
pub mod nearby;

pub use aggregate::{
    AssignDeliveryRequest, Delivery, DeliveryPerson, DeliveryPersonPatch, DeliveryPriority,
    DeliveryStatus, NewDeliveryPerson,
};
pub use nearby::{visible_deliveries, DeliveryStats, PriorityFilter};
