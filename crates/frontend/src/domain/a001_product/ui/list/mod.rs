mod card;
pub mod state;

use crate::shared::components::ui::Badge;
use card::ProductCard;
use contracts::domain::a001_product::catalog::products;
use contracts::domain::a001_product::list_categories;
use leptos::prelude::*;
use state::{chip_variant, create_state};

/// Category chips plus the filtered product grid.
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let categories = list_categories(products());

    let select_category = move |category: String| {
        log::debug!("Category selected: {}", category);
        state.update(|s| s.filter.select(category));
    };

    let visible = move || state.with(|s| s.filter.apply(products()));

    view! {
        <div class="category-bar">
            {categories
                .into_iter()
                .map(|category| {
                    let label = category.clone();
                    let variant_of = category.clone();
                    let on_click = Callback::new(move |_| select_category(category.clone()));
                    view! {
                        <Badge
                            variant=Signal::derive(move || {
                                state.with(|s| chip_variant(s, &variant_of).to_string())
                            })
                            class="category-chip"
                            on_click=on_click
                        >
                            {label}
                        </Badge>
                    }
                })
                .collect_view()}
        </div>

        <div class="product-grid">
            <For
                each=move || visible().into_iter().enumerate()
                key=|(_, product)| product.id
                children=|(index, product)| view! { <ProductCard product=product index=index /> }
            />
        </div>
    }
}
