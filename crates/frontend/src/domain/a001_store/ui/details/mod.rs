//! Store profile screen
//!
//! - model.rs: remote calls and the geocode/validate/save pipeline
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::StoreDetails;
pub use view_model::StoreDetailsViewModel;
