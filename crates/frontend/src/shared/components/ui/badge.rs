use leptos::prelude::*;

/// Badge component with different variants
///
/// Clickable when `on_click` is set (category chips).
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    let variant_class = move || badge_variant_class(variant.get().as_deref());
    let clickable_class = if on_click.is_some() { "badge--clickable" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span
            class=move || format!("badge {} {} {}", variant_class(), clickable_class, additional_class())
            role=on_click.is_some().then_some("button")
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </span>
    }
}

pub fn badge_variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant_class() {
        assert_eq!(badge_variant_class(Some("primary")), "badge--primary");
        assert_eq!(badge_variant_class(Some("success")), "badge--success");
        assert_eq!(badge_variant_class(Some("unknown")), "badge--neutral");
        assert_eq!(badge_variant_class(None), "badge--neutral");
    }
}
