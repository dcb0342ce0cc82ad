use crate::pages::catalog::CatalogPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub const CATALOG_PATH: &str = "/";
pub const PROFILE_PATH: &str = "/profile";

/// Two screens: catalog at the root and the guest profile.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=CatalogPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
        </Router>
    }
}
