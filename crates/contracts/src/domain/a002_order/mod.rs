pub mod aggregate;
pub mod board;
pub mod notifier;

pub use aggregate::{OrderRecord, OrderStatus, OrderView, OrdersResponse, Product};
pub use board::{OrderBoard, PollApplied, PollTicket};
pub use notifier::{OrderEvent, OrderNotifier};
