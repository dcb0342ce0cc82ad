use serde::{Deserialize, Serialize};

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Completed,
}

impl OrderStatus {
    /// Код статуса
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Completed,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "shipped" => Some(OrderStatus::Shipped),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// Подпись и стиль бейджа статуса
///
/// `variant` совпадает с вариантами компонента `Badge` во frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub variant: &'static str,
}

pub fn describe_status(status: OrderStatus) -> StatusBadge {
    match status {
        OrderStatus::Pending => StatusBadge {
            label: "В обработке",
            variant: "warning",
        },
        OrderStatus::Shipped => StatusBadge {
            label: "Отправлен",
            variant: "primary",
        },
        OrderStatus::Completed => StatusBadge {
            label: "Получен",
            variant: "success",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_label_and_variant() {
        for status in OrderStatus::all() {
            let badge = describe_status(status);
            assert!(!badge.label.is_empty());
            assert!(!badge.variant.is_empty());
            assert_ne!(badge.label, status.code());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(describe_status(OrderStatus::Pending).label, "В обработке");
        assert_eq!(describe_status(OrderStatus::Shipped).label, "Отправлен");
        assert_eq!(describe_status(OrderStatus::Completed).label, "Получен");
    }

    #[test]
    fn test_code_roundtrip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("Shipped"), None);
        assert_eq!(OrderStatus::from_code(""), None);
    }
}
