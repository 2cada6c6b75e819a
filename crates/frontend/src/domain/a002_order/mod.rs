pub mod api;
pub mod notifier;
pub mod ui;
