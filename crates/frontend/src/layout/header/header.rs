use crate::shared::i18n::{use_locale, LocaleSwitch};
use contracts::domain::a001_content_item::seed::KNOWN_PAGES;
use leptos::prelude::*;
use leptos_router::components::A;

/// Navigation target of a site page
pub fn page_href(page: &str) -> String {
    if page == "home" {
        "/".to_string()
    } else {
        format!("/page/{}", page)
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();

    let nav_items = KNOWN_PAGES
        .iter()
        .map(|page| {
            let key: &'static str = match *page {
                "home" => "nav.home",
                "about" => "nav.about",
                "activities" => "nav.activities",
                "publications" => "nav.publications",
                "members" => "nav.members",
                "partners" => "nav.partners",
                "channel" => "nav.channel",
                _ => "nav.contact",
            };
            view! {
                <li class="nav__item">
                    <A href=page_href(page)>{locale.t(key)}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{locale.t("site.name")}</span>
                <span class="header__tagline">{locale.t("site.tagline")}</span>
            </div>
            <nav class="nav">
                <ul class="nav__list">
                    {nav_items}
                    <li class="nav__item nav__item--admin">
                        <A href="/admin">{locale.t("nav.admin")}</A>
                    </li>
                </ul>
            </nav>
            <div class="header__actions">
                <LocaleSwitch />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_to_root() {
        assert_eq!(page_href("home"), "/");
        assert_eq!(page_href("contact"), "/page/contact");
    }
}
