use crate::shared::icons::icon_sized;
use leptos::prelude::*;

/// Placeholder card shown instead of an empty list, with an action below the message.
#[component]
pub fn EmptyState(
    /// Icon name from `shared::icons`
    #[prop(into)]
    icon: String,
    #[prop(into)]
    message: String,
    /// Call-to-action (link or button)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon_sized(&icon, 48)}</div>
            <p class="empty-state__message">{message}</p>
            <div class="empty-state__action">{children()}</div>
        </div>
    }
}
