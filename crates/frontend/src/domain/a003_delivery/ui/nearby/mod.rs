//! Deliveries near the signed-in driver

mod view;
mod view_model;

pub use view::DeliveriesPage;
pub use view_model::DeliveriesViewModel;
