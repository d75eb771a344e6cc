use crate::shared::api_utils::api_url;
use crate::shared::i18n::use_locale;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            ServerStatus::Online => "●",
            ServerStatus::Offline => "○",
            ServerStatus::Checking => "◌",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let status = RwSignal::new(ServerStatus::Checking);

    // Check the backend once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__rights">
                {locale.t("site.name")} " · " {locale.t("footer.rights")}
            </span>
            <span class=move || status.get().css_class() title="API">
                {move || status.get().symbol()}
            </span>
        </footer>
    }
}

async fn ping_server() -> bool {
    match gloo_net::http::Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
