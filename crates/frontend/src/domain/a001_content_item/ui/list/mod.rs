use crate::domain::a001_content_item::context::{use_content, ContentContext};
use crate::domain::a001_content_item::model;
use crate::domain::a001_content_item::ui::details::ContentDetails;
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use contracts::domain::a001_content_item::{ContentItem, ContentItemId, ContentValue};
use contracts::domain::common::AggregateId;
use contracts::shared::i18n::{translate, Locale};
use leptos::prelude::*;

/// Longest value preview shown in the table, in characters
const PREVIEW_LEN: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentRow {
    pub id: String,
    pub page: String,
    pub section: String,
    pub field: String,
    pub label: String,
    pub kind_key: &'static str,
    pub preview: String,
    pub image: Option<String>,
}

impl ContentRow {
    pub fn from_item(item: &ContentItem, locale: Locale) -> Self {
        let (preview, image) = match &item.value {
            ContentValue::Text(text) => (truncate(text.get(locale), PREVIEW_LEN), None),
            ContentValue::Image(url) => (truncate(url, PREVIEW_LEN), Some(url.clone())),
        };
        Self {
            id: item.id.as_string(),
            page: item.page.clone(),
            section: item.section.clone(),
            field: item.field.clone(),
            label: item.label.clone(),
            kind_key: item.kind().label_key(),
            preview,
            image,
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push('…');
        out
    }
}

/// Rows for the table; an empty filter means every page
pub fn build_rows(items: &[ContentItem], page_filter: &str, locale: Locale) -> Vec<ContentRow> {
    items
        .iter()
        .filter(|item| page_filter.is_empty() || item.page == page_filter)
        .map(|item| ContentRow::from_item(item, locale))
        .collect()
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn ContentAdmin() -> impl IntoView {
    let content = use_content();
    let locale = use_locale();

    let page_filter = RwSignal::new(String::new());
    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let pages = move || {
        content
            .read(|registry| {
                registry
                    .pages()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let rows = move || {
        let filter = page_filter.get();
        let locale = locale.locale.get();
        content
            .read(|registry| build_rows(registry.list_all(), &filter, locale))
            .unwrap_or_default()
    };

    let open_editor = move |id: Option<String>| {
        error.set(None);
        notice.set(None);
        editing_id.set(id);
        show_editor.set(true);
    };

    let on_saved = Callback::new(move |_| show_editor.set(false));
    let on_cancel = Callback::new(move |_| show_editor.set(false));

    let delete_item = move |id: String| {
        if !confirm(&locale.t_now("admin.confirm_delete")) {
            return;
        }
        let id = ContentItemId::new(id);
        if let Err(e) = content.mutate(|registry| registry.delete(&id)) {
            error.set(Some(e));
        }
    };

    let reset_defaults = move |_| {
        if !confirm(&locale.t_now("admin.confirm_reset")) {
            return;
        }
        match content.mutate(|registry| registry.reset_to_defaults()) {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e)),
        }
    };

    let load_from_server = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(items) => match content.mutate(|registry| registry.reset(items)) {
                    Ok(()) => {
                        error.set(None);
                        notice.set(Some(locale.t_now("admin.loaded")));
                    }
                    Err(e) => error.set(Some(e)),
                },
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let publish_to_server = move |_| {
        let items = content
            .read(|registry| registry.list_all().to_vec())
            .unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            match model::replace_all(&items).await {
                Ok(count) => {
                    log::info!("Published {} content items", count);
                    error.set(None);
                    notice.set(Some(format!("{} ({})", locale.t_now("admin.published"), count)));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="content-admin">
            <div class="header">
                <h2>{locale.t("admin.title")}</h2>
                <div class="header-actions">
                    <button class="btn btn-primary" on:click=move |_| open_editor(None)>
                        {icon("plus")}
                        {locale.t("admin.add")}
                    </button>
                    <button class="btn btn-secondary" on:click=load_from_server>
                        {icon("download")}
                        {locale.t("admin.load_server")}
                    </button>
                    <button class="btn btn-secondary" on:click=publish_to_server>
                        {icon("upload")}
                        {locale.t("admin.publish_server")}
                    </button>
                    <button class="btn btn-secondary" on:click=reset_defaults>
                        {icon("refresh")}
                        {locale.t("admin.reset_defaults")}
                    </button>
                </div>
            </div>

            <LoadErrorBanner content=content />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || notice.get().map(|n| view! { <div class="notice">{n}</div> })}

            <div class="filters">
                <label for="page_filter">{locale.t("admin.page_filter")}</label>
                <select
                    id="page_filter"
                    on:change=move |ev| page_filter.set(event_target_value(&ev))
                >
                    <option value="" prop:selected=move || page_filter.get().is_empty()>
                        {locale.t("admin.all_pages")}
                    </option>
                    <For
                        each=pages
                        key=|page| page.clone()
                        children=move |page| {
                            let value = page.clone();
                            let selected = page.clone();
                            view! {
                                <option value=value prop:selected=move || page_filter.get() == selected>
                                    {page}
                                </option>
                            }
                        }
                    />
                </select>
                <span class="count">
                    {locale.t("admin.count")} ": " {move || rows().len()}
                </span>
            </div>

            <Show when=move || show_editor.get()>
                // re-created when another row is picked for editing
                {move || {
                    let filter = page_filter.get_untracked();
                    view! {
                        <ContentDetails
                            id=editing_id.get()
                            page=(!filter.is_empty()).then_some(filter)
                            on_saved=on_saved
                            on_cancel=on_cancel
                        />
                    }
                }}
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>{locale.t("admin.col.page")}</th>
                        <th>{locale.t("admin.col.section")}</th>
                        <th>{locale.t("admin.col.field")}</th>
                        <th>{locale.t("admin.col.label")}</th>
                        <th>{locale.t("admin.col.type")}</th>
                        <th>{locale.t("admin.col.value")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |row: ContentRow| {
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            let kind_key = row.kind_key;
                            view! {
                                <tr>
                                    <td>{row.page}</td>
                                    <td>{row.section}</td>
                                    <td>{row.field}</td>
                                    <td>{row.label}</td>
                                    <td>{move || translate(kind_key, locale.locale.get()).to_string()}</td>
                                    <td class="value-preview">
                                        {row.image.map(|url| view! { <img class="thumb" src=url alt="" /> })}
                                        <span>{row.preview}</span>
                                    </td>
                                    <td class="row-actions">
                                        <button
                                            class="btn btn-ghost"
                                            title=locale.t("admin.edit")
                                            on:click=move |_| open_editor(Some(edit_id.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="btn btn-ghost"
                                            title=locale.t("admin.delete")
                                            on:click=move |_| delete_item(delete_id.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

/// Shown when stored content could not be read; offers to start over from defaults
#[component]
fn LoadErrorBanner(content: ContentContext) -> impl IntoView {
    let locale = use_locale();
    move || {
        content.load_error.get().map(|e| {
            view! {
                <div class="error">
                    <span>{e}</span>
                    <button class="btn btn-secondary" on:click=move |_| content.recover()>
                        {icon("refresh")}
                        {locale.t("admin.reset_defaults")}
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_content_item::seed;

    #[test]
    fn rows_follow_page_filter() {
        let items = seed::default_content();
        let all = build_rows(&items, "", Locale::Fr);
        assert_eq!(all.len(), items.len());

        let contact = build_rows(&items, "contact", Locale::Fr);
        assert!(!contact.is_empty());
        assert!(contact.iter().all(|r| r.page == "contact"));
    }

    #[test]
    fn image_rows_carry_thumbnail() {
        let items = seed::default_content();
        let rows = build_rows(&items, "home", Locale::Ar);
        let image = rows.iter().find(|r| r.field == "image").unwrap();
        assert_eq!(image.image.as_deref(), Some("/static/img/hero.jpg"));
        assert_eq!(image.kind_key, "admin.type.image");
    }

    #[test]
    fn long_values_are_truncated() {
        let long = "x".repeat(PREVIEW_LEN + 5);
        let cut = truncate(&long, PREVIEW_LEN);
        assert_eq!(cut.chars().count(), PREVIEW_LEN + 1);
        assert!(cut.ends_with('…'));
    }
}
