use crate::domain::a001_content_item::context::use_content;
use crate::shared::i18n::use_locale;
use contracts::domain::a001_content_item::{ContentCollection, ContentValue};
use contracts::shared::i18n::{translate, Locale};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Text { field: String, text: String },
    Image { field: String, url: String, alt: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    pub section: String,
    pub blocks: Vec<Block>,
}

/// Sections of a page in display order, values resolved for `locale`.
/// Empty text values are skipped.
pub fn build_sections(collection: &ContentCollection, page: &str, locale: Locale) -> Vec<SectionView> {
    collection
        .group_by_section(page)
        .into_iter()
        .map(|group| SectionView {
            section: group.section.to_string(),
            blocks: group
                .items
                .into_iter()
                .filter_map(|item| match &item.value {
                    ContentValue::Image(url) => Some(Block::Image {
                        field: item.field.clone(),
                        url: url.clone(),
                        alt: item.label.clone(),
                    }),
                    ContentValue::Text(text) => {
                        let text = text.get(locale);
                        (!text.trim().is_empty()).then(|| Block::Text {
                            field: item.field.clone(),
                            text: text.to_string(),
                        })
                    }
                })
                .collect(),
        })
        .collect()
}

/// Title of a page: its navigation label, or the raw page name for pages
/// outside the menu
pub fn page_title(page: &str, locale: Locale) -> String {
    let key = format!("nav.{}", page);
    let title = translate(&key, locale);
    if title == key {
        page.to_string()
    } else {
        title.to_string()
    }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Text { field, text } => match field.as_str() {
            "title" => view! { <h2 class="block block--title">{text}</h2> }.into_any(),
            "subtitle" => view! { <h3 class="block block--subtitle">{text}</h3> }.into_any(),
            _ => view! { <p class=format!("block block--{}", field)>{text}</p> }.into_any(),
        },
        Block::Image { url, alt, .. } => {
            view! { <img class="block block--image" src=url alt=alt /> }.into_any()
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SitePage() -> impl IntoView {
    let params = use_params_map();
    let content = use_content();
    let locale = use_locale();

    let page = move || {
        params
            .read()
            .get("page")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "home".to_string())
    };

    let sections = move || {
        let page = page();
        let locale = locale.locale.get();
        content
            .read(|registry| build_sections(registry.collection(), &page, locale))
            .unwrap_or_default()
    };

    view! {
        <article class=move || format!("site-page site-page--{}", page())>
            <h1 class="site-page__title">{move || page_title(&page(), locale.locale.get())}</h1>
            {move || {
                let sections = sections();
                if sections.is_empty() {
                    view! { <p class="site-page__empty">{locale.tr("page.empty")}</p> }.into_any()
                } else {
                    sections
                        .into_iter()
                        .map(|s| {
                            view! {
                                <section class=format!("section section--{}", s.section)>
                                    {s.blocks.into_iter().map(render_block).collect_view()}
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </article>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NotFound() -> impl IntoView {
    let locale = use_locale();
    view! {
        <article class="site-page site-page--not-found">
            <h1>{locale.t("page.not_found")}</h1>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_content_item::{seed, ContentItem, ContentItemId};
    use contracts::domain::common::LocalizedText;

    fn collection() -> ContentCollection {
        ContentCollection::new(seed::default_content())
    }

    #[test]
    fn sections_keep_first_appearance_order() {
        let sections = build_sections(&collection(), "home", Locale::Fr);
        let names: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(names, vec!["hero", "intro"]);
    }

    #[test]
    fn text_resolves_in_requested_locale() {
        let sections = build_sections(&collection(), "home", Locale::Ar);
        let hero = &sections[0];
        assert!(hero.blocks.contains(&Block::Text {
            field: "title".to_string(),
            text: "مرحبا بكم في جمعيتنا الثقافية".to_string(),
        }));
        assert!(hero.blocks.iter().any(|b| matches!(b, Block::Image { url, .. } if url == "/static/img/hero.jpg")));
    }

    #[test]
    fn blank_text_is_skipped() {
        let items = vec![ContentItem::text(
            ContentItemId::new("x-a-title"),
            "x",
            "a",
            "title",
            "Title",
            LocalizedText::new("عنوان", ""),
        )];
        let collection = ContentCollection::new(items);
        let fr = build_sections(&collection, "x", Locale::Fr);
        assert!(fr[0].blocks.is_empty());
        assert_eq!(build_sections(&collection, "x", Locale::Ar)[0].blocks.len(), 1);
    }

    #[test]
    fn unknown_page_has_no_sections() {
        assert!(build_sections(&collection(), "nowhere", Locale::Fr).is_empty());
    }

    #[test]
    fn title_falls_back_to_page_name() {
        assert_eq!(page_title("contact", Locale::Fr), "Contact");
        assert_eq!(page_title("events", Locale::Fr), "events");
    }
}
