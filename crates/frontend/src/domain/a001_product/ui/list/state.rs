use contracts::domain::a001_product::CategoryFilter;
use leptos::prelude::*;

/// Состояние списка товаров живёт, пока смонтирован каталог,
/// и при каждом монтировании начинается с «Все».
#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub filter: CategoryFilter,
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

/// Вариант бейджа для чипа категории
pub fn chip_variant(state: &ProductListState, category: &str) -> &'static str {
    if state.filter.is_selected(category) {
        "primary"
    } else {
        "neutral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ALL_CATEGORIES;

    #[test]
    fn test_initial_state_selects_all() {
        let state = ProductListState::default();
        assert_eq!(state.filter.selected(), ALL_CATEGORIES);
        assert_eq!(chip_variant(&state, ALL_CATEGORIES), "primary");
        assert_eq!(chip_variant(&state, "Декор"), "neutral");
    }

    #[test]
    fn test_chip_follows_selection() {
        let mut state = ProductListState::default();
        state.filter.select("Декор");
        assert_eq!(chip_variant(&state, "Декор"), "primary");
        assert_eq!(chip_variant(&state, ALL_CATEGORIES), "neutral");
    }
}
