use crate::domain::a001_product::ui::list::ProductList;
use crate::layout::header::CatalogHeader;
use crate::layout::Shell;
use crate::shared::components::PageHeader;
use contracts::shared::config::shop_config;
use leptos::prelude::*;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = shop_config();

    view! {
        <Shell header=|| view! { <CatalogHeader /> }.into_any() with_footer=true>
            <PageHeader title=config.tagline.clone() subtitle=config.description.clone() />
            <ProductList />
        </Shell>
    }
}
