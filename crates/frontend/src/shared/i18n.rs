//! Locale context for the application.
//!
//! The chosen locale is persisted in localStorage and mirrored on the
//! `<html>` element (`lang` and `dir`) so Arabic renders right-to-left.

use contracts::shared::i18n::{translate, Locale};
use leptos::prelude::*;
use web_sys::window;

const LOCALE_STORAGE_KEY: &str = "site_locale";

fn load_locale_from_storage() -> Locale {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .and_then(|s| Locale::from_code(&s))
        .unwrap_or_default()
}

fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
    }
}

fn apply_locale_to_document(locale: Locale) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", locale.code());
    let _ = root.set_attribute("dir", locale.direction());
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn new() -> Self {
        let locale = RwSignal::new(load_locale_from_storage());

        Effect::new(move |_| {
            let current = locale.get();
            apply_locale_to_document(current);
            save_locale_to_storage(current);
        });

        Self { locale }
    }

    pub fn toggle(&self) {
        self.locale.update(|l| *l = l.other());
    }

    /// Reactive translation of a dictionary key
    pub fn t(&self, key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        let locale = self.locale;
        move || translate(key, locale.get()).to_string()
    }

    /// Translation in the current locale, tracking locale changes
    pub fn tr(&self, key: &str) -> String {
        translate(key, self.locale.get()).to_string()
    }

    /// Translation in the current locale, without tracking
    pub fn t_now(&self, key: &str) -> String {
        translate(key, self.locale.get_untracked()).to_string()
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found in context")
}

/// Button switching to the other locale
#[component]
pub fn LocaleSwitch() -> impl IntoView {
    let ctx = use_locale();

    view! {
        <button
            class="button button--ghost locale-switch"
            aria-label=ctx.t("nav.language")
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.locale.get().other().native_name()}
        </button>
    }
}
