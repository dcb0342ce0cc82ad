//! Фильтрация каталога по категории.

use super::aggregate::Product;
use std::collections::HashSet;

/// Синтетическая категория «все товары», всегда первая в списке
pub const ALL_CATEGORIES: &str = "Все";

/// Список категорий для панели фильтра.
///
/// Первым идёт [`ALL_CATEGORIES`], затем каждая встречающаяся категория
/// ровно один раз, в порядке первого появления в `products`.
pub fn list_categories(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(products.len());
    let mut categories = Vec::with_capacity(products.len() + 1);
    categories.push(ALL_CATEGORIES.to_string());

    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }

    categories
}

/// Товары выбранной категории с сохранением исходного порядка.
///
/// Для [`ALL_CATEGORIES`] возвращается весь список. Неизвестная категория
/// даёт пустой результат.
pub fn filter_products<'a>(products: &'a [Product], selected: &str) -> Vec<&'a Product> {
    if selected == ALL_CATEGORIES {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| p.category == selected)
        .collect()
}

/// Состояние фильтра каталога: выбранная категория.
///
/// Значение принимается как есть, без сверки со списком категорий.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CategoryFilter {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = category.into();
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected == category
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, &self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "A", 100, "a.jpg", "X"),
            Product::new(2, "B", 200, "b.jpg", "Y"),
        ]
    }

    fn mixed() -> Vec<Product> {
        vec![
            Product::new(1, "A", 100, "a.jpg", "X"),
            Product::new(2, "B", 200, "b.jpg", "Y"),
            Product::new(3, "C", 300, "c.jpg", "X"),
            Product::new(4, "D", 400, "d.jpg", "Z"),
            Product::new(5, "E", 500, "e.jpg", "Y"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_list_categories_scenario() {
        assert_eq!(list_categories(&sample()), vec!["Все", "X", "Y"]);
    }

    #[test]
    fn test_list_categories_dedup_first_seen_order() {
        let categories = list_categories(&mixed());
        assert_eq!(categories, vec!["Все", "X", "Y", "Z"]);

        let unique: HashSet<&String> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
    }

    #[test]
    fn test_list_categories_empty_input() {
        assert_eq!(list_categories(&[]), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn test_filter_scenario() {
        let products = sample();
        assert_eq!(ids(&filter_products(&products, "X")), vec![1]);
        assert_eq!(ids(&filter_products(&products, ALL_CATEGORIES)), vec![1, 2]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let products = mixed();
        assert_eq!(ids(&filter_products(&products, "X")), vec![1, 3]);
        assert_eq!(ids(&filter_products(&products, "Y")), vec![2, 5]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let products = mixed();
        let all = filter_products(&products, ALL_CATEGORIES);
        assert_eq!(all.len(), products.len());
        for (got, expected) in all.iter().zip(products.iter()) {
            assert!(std::ptr::eq(*got, expected));
        }
    }

    #[test]
    fn test_filter_never_grows_or_invents() {
        let products = mixed();
        for category in list_categories(&products) {
            let filtered = filter_products(&products, &category);
            assert!(filtered.len() <= products.len());
            assert!(filtered
                .iter()
                .all(|p| products.iter().any(|q| std::ptr::eq(*p, q))));
        }
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let products = mixed();
        assert!(filter_products(&products, "Нет такой").is_empty());
        // Регистр учитывается
        assert!(filter_products(&products, "x").is_empty());
    }

    #[test]
    fn test_category_filter_state() {
        let products = mixed();
        let mut filter = CategoryFilter::default();
        assert_eq!(filter.selected(), ALL_CATEGORIES);
        assert_eq!(filter.apply(&products).len(), 5);

        filter.select("Z");
        assert!(filter.is_selected("Z"));
        assert!(!filter.is_selected(ALL_CATEGORIES));
        assert_eq!(ids(&filter.apply(&products)), vec![4]);

        filter.select("unknown");
        assert!(filter.apply(&products).is_empty());
    }
}
