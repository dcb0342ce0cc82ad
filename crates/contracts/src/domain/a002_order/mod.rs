pub mod aggregate;
pub mod display;
pub mod history;
pub mod status;

pub use aggregate::{Order, OrderId};
pub use display::{format_order, order_history, OrderCard, OrderHistoryView};
pub use status::{describe_status, OrderStatus, StatusBadge};
