use crate::domain::a001_content_item::context::ContentContext;
use crate::shared::i18n::LocaleContext;
use contracts::domain::a001_content_item::{ContentItemDto, ContentItemId, ContentKind};
use leptos::prelude::*;

/// ViewModel for the content item form
#[derive(Clone, Copy)]
pub struct ContentDetailsViewModel {
    pub form: RwSignal<ContentItemDto>,
    pub error: RwSignal<Option<String>>,
    content: ContentContext,
    locale: LocaleContext,
}

impl ContentDetailsViewModel {
    pub fn new(content: ContentContext, locale: LocaleContext) -> Self {
        Self {
            form: RwSignal::new(ContentItemDto::default()),
            error: RwSignal::new(None),
            content,
            locale,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_locked())
    }

    pub fn is_image(&self) -> bool {
        self.form.with(|f| f.kind == ContentKind::Image)
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Fill the form from the registry when editing, or preset the page
    /// when creating
    pub fn load(&self, id: Option<String>, page: Option<String>) {
        match id {
            Some(existing_id) => {
                let id = ContentItemId::new(existing_id);
                let dto = self
                    .content
                    .read(|registry| registry.find(&id).map(ContentItemDto::from))
                    .flatten();
                match dto {
                    Some(dto) => self.form.set(dto),
                    None => self
                        .error
                        .set(Some(format!("{}: {}", self.locale.t_now("page.not_found"), id))),
                }
            }
            None => {
                self.form
                    .set(ContentItemDto::for_page(page.as_deref().unwrap_or_default()));
            }
        }
    }

    pub fn set_kind(&self, kind: ContentKind) {
        // type is fixed once the item exists
        if !self.is_edit_mode() {
            self.form.update(|f| f.kind = kind);
        }
    }

    /// Persist the form; calls `on_saved` only when the registry accepted it
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();

        if current.validate().is_err() {
            self.error.set(Some(self.locale.t_now("admin.required")));
            return;
        }

        let result = match current.id.clone() {
            Some(id) => {
                let patch = current.to_patch();
                self.content
                    .mutate(|registry| registry.update(&ContentItemId::new(id), &patch))
            }
            None => {
                let item = current.into_item();
                self.content.mutate(|registry| registry.add(item))
            }
        };

        match result {
            Ok(()) => {
                self.error.set(None);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
