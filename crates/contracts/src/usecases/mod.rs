pub mod common;
pub mod u501_order_in_telegram;
