use crate::domain::a001_content_item::ui::list::ContentAdmin;
use crate::layout::Shell;
use crate::pages::site_page::{NotFound, SitePage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=SitePage />
                    <Route path=path!("/page/:page") view=SitePage />
                    <Route path=path!("/admin") view=ContentAdmin />
                </Routes>
            </Shell>
        </Router>
    }
}
