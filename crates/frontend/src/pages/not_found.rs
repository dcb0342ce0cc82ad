use crate::layout::header::CatalogHeader;
use crate::layout::Shell;
use crate::routes::routes::CATALOG_PATH;
use crate::shared::components::EmptyState;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Shell header=|| view! { <CatalogHeader /> }.into_any()>
            <EmptyState icon="store" message="Страница не найдена">
                <A href=CATALOG_PATH attr:class="button button--primary">"Перейти в каталог"</A>
            </EmptyState>
        </Shell>
    }
}
