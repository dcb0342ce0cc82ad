pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page frame shared by both screens.
///
/// ```text
/// +------------------------------------------+
/// |              Header (sticky)             |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// |              Footer (optional)           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<H>(
    header: H,
    /// Show the shop footer under the content
    #[prop(optional)]
    with_footer: bool,
    /// Extra class for `<main>` (e.g. a narrower container)
    #[prop(optional, into)]
    main_class: MaybeProp<String>,
    children: Children,
) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
{
    let main_class = move || format!("app-main container {}", main_class.get().unwrap_or_default());

    view! {
        <div class="app-layout">
            {header()}
            <main class=main_class>
                {children()}
            </main>
            {with_footer.then(|| view! { <footer::Footer /> })}
        </div>
    }
}
