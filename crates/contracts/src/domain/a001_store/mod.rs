pub mod aggregate;
pub mod location;
pub mod store_hours;

pub use aggregate::{StoreInfo, StoreInfoPayload, UpdateStoreRequest};
pub use location::{BoundingBox, Coordinates, StoreAddress};
pub use store_hours::{DaySchedule, StoreHours, Weekday};
