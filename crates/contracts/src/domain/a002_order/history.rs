//! История заказов гостя. Данные демонстрационные и не меняются.

use super::aggregate::Order;
use super::status::OrderStatus;
use once_cell::sync::Lazy;

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Order::new(1, "Кулон с лавандой", 1200, "2024-11-05", OrderStatus::Completed),
        Order::new(2, "Цветочная люстра", 8500, "2024-11-03", OrderStatus::Shipped),
        Order::new(3, "Подвеска с папоротником", 1350, "2024-11-01", OrderStatus::Pending),
    ]
});

pub fn orders() -> &'static [Order] {
    ORDERS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_are_valid() {
        for order in orders() {
            assert!(order.order_date().is_ok(), "bad date in order #{}", order.id.0);
        }
    }

    #[test]
    fn test_seed_covers_every_status() {
        for status in OrderStatus::all() {
            assert!(orders().iter().any(|o| o.status == status));
        }
    }
}
