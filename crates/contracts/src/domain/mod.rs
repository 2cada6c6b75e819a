pub mod a001_store;
pub mod a002_order;
pub mod a003_delivery;
