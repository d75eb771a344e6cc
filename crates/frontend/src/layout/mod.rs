pub mod footer;
pub mod header;

use footer::footer::Footer;
use header::header::Header;
use leptos::prelude::*;

/// Page frame shared by the public site and the admin area.
///
/// ```text
/// +------------------------------------------+
/// |   Header (site name, nav, locale)        |
/// +------------------------------------------+
/// |   Content                                |
/// +------------------------------------------+
/// |   Footer (rights, server status)         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
