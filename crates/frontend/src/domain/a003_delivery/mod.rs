pub mod api;
pub mod geolocation;
pub mod ui;
