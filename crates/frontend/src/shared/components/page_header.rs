use leptos::prelude::*;

/// PageHeader component - centered title block for page sections
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <h2 class="page-header__title">{title}</h2>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </section>
    }
}
