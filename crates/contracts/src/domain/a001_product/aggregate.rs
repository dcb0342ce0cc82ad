use crate::domain::common::aggregate_id::parse_positive_id;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_positive_id(s).map(ProductId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар витрины
///
/// Категория хранится как свободная строка: отдельного справочника категорий
/// нет, набор категорий выводится из самих товаров (см. `filter::list_categories`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Цена в целых рублях
    pub price: u32,
    /// Внешняя ссылка на изображение, используется как есть
    pub image: String,
    pub category: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u32,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip_string() {
        let id = ProductId::new(5);
        assert_eq!(id.as_string(), "5");
        assert_eq!(ProductId::from_string("5"), Ok(id));
        assert!(ProductId::from_string("0").is_err());
    }

    #[test]
    fn test_product_json_shape() {
        let p = Product::new(1, "A", 100, "https://img/a.jpg", "X");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "A");
        assert_eq!(json["price"], 100);
        assert_eq!(json["category"], "X");
    }
}
