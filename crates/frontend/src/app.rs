use crate::domain::a001_content_item::context::ContentContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::LocaleContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Current locale, persisted and applied to <html lang dir>
    provide_context(LocaleContext::new());

    // Content registry backed by localStorage
    provide_context(ContentContext::new());

    view! {
        <AppRoutes />
    }
}
