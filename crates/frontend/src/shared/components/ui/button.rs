use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost) and sizes (sm, md, lg)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--small",
        Some("lg") => "button--large",
        _ => "",
    };

    let block_class = if block { "button--block" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {} {}", variant_class(), size_class(), block_class, additional_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
