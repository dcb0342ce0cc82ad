use super::status::OrderStatus;
use crate::domain::common::aggregate_id::parse_positive_id;
use crate::domain::common::AggregateId;
use crate::shared::format::parse_date;
use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Номер заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl OrderId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_positive_id(s).map(OrderId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ из истории профиля
///
/// Название товара копируется в заказ при оформлении и не ссылается на
/// `Product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub price: u32,
    /// ISO-дата `YYYY-MM-DD`
    pub date: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        id: u32,
        product_name: impl Into<String>,
        price: u32,
        date: impl Into<String>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: OrderId::new(id),
            product_name: product_name.into(),
            price,
            date: date.into(),
            status,
        }
    }

    /// Дата заказа как календарная дата
    pub fn order_date(&self) -> anyhow::Result<NaiveDate> {
        parse_date(&self.date)
            .ok_or_else(|| anyhow!("order #{} has malformed date {:?}", self.id.0, self.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_date() {
        let order = Order::new(1, "A", 100, "2024-11-05", OrderStatus::Completed);
        assert_eq!(
            order.order_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
        );

        let broken = Order::new(2, "B", 100, "05/11/2024", OrderStatus::Pending);
        let err = broken.order_date().unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order::new(2, "Цветочная люстра", 8500, "2024-11-03", OrderStatus::Shipped);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["productName"], "Цветочная люстра");
        assert_eq!(json["status"], "shipped");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{"id":1,"productName":"A","price":1,"date":"2024-01-01","status":"lost"}"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }
}
