//! Live order board of the signed-in store

mod view;
mod view_model;

pub use view::OrderBoardPage;
pub use view_model::OrderBoardViewModel;
