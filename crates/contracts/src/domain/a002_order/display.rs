//! Подготовка заказов к показу в профиле.

use super::aggregate::Order;
use super::status::{describe_status, StatusBadge};
use crate::domain::common::AggregateId;
use crate::shared::format::{format_naive_date, format_price};

/// Поля карточки заказа, готовые к выводу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    pub key: String,
    pub product_name: String,
    pub number: String,
    pub price: String,
    pub date: String,
    pub status: StatusBadge,
}

pub fn format_order(order: &Order, currency_sign: &str) -> OrderCard {
    let date = match order.order_date() {
        Ok(d) => format_naive_date(d),
        Err(_) => order.date.clone(),
    };

    OrderCard {
        key: order.id.as_string(),
        product_name: order.product_name.clone(),
        number: format!("Заказ #{}", order.id.0),
        price: format_price(order.price, currency_sign),
        date,
        status: describe_status(order.status),
    }
}

/// Что показывать в блоке «Мои заказы»
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderHistoryView {
    /// Заказов нет: вместо списка предлагаем перейти в каталог
    Empty,
    Orders(Vec<OrderCard>),
}

pub fn order_history(orders: &[Order], currency_sign: &str) -> OrderHistoryView {
    if orders.is_empty() {
        return OrderHistoryView::Empty;
    }

    OrderHistoryView::Orders(
        orders
            .iter()
            .map(|o| format_order(o, currency_sign))
            .collect(),
    )
}
