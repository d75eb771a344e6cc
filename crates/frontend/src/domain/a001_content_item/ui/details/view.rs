use super::view_model::ContentDetailsViewModel;
use crate::domain::a001_content_item::context::use_content;
use crate::shared::i18n::{use_locale, LocaleContext};
use crate::shared::icons::icon;
use crate::shared::image_upload::ImageUpload;
use contracts::domain::a001_content_item::{ContentItemDto, ContentKind};
use leptos::prelude::*;

/// Text input bound to one classifier of the form; read-only once the item exists
fn classifier_input(
    vm: ContentDetailsViewModel,
    locale: LocaleContext,
    id: &'static str,
    label_key: &'static str,
    get: fn(&ContentItemDto) -> String,
    set: fn(&mut ContentItemDto, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{locale.t(label_key)}</label>
            <input
                type="text"
                id=id
                dir="ltr"
                prop:value=move || vm.form.with(get)
                prop:readOnly=move || vm.is_edit_mode()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn ContentDetails(
    id: Option<String>,
    /// Page preset for a new item
    page: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let locale = use_locale();
    let vm = ContentDetailsViewModel::new(use_content(), locale);
    vm.load(id, page);

    let on_image_loaded = Callback::new(move |url: String| {
        vm.form.update(|f| f.url = url);
    });

    view! {
        <div class="details-container content-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { locale.tr("admin.edit") } else { locale.tr("admin.new") }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {classifier_input(vm, locale, "page", "admin.col.page", |f| f.page.clone(), |f, v| f.page = v)}
                {classifier_input(vm, locale, "section", "admin.col.section", |f| f.section.clone(), |f, v| f.section = v)}
                {classifier_input(vm, locale, "field", "admin.col.field", |f| f.field.clone(), |f, v| f.field = v)}

                <div class="form-group">
                    <label for="label">{locale.t("admin.col.label")}</label>
                    <input
                        type="text"
                        id="label"
                        prop:value=move || vm.form.with(|f| f.label.clone())
                        prop:readOnly=move || vm.is_edit_mode()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.set_label(value);
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="kind">{locale.t("admin.col.type")}</label>
                    <select
                        id="kind"
                        prop:disabled=move || vm.is_edit_mode()
                        on:change=move |ev| {
                            if let Some(kind) = ContentKind::from_str(&event_target_value(&ev)) {
                                vm.set_kind(kind);
                            }
                        }
                    >
                        <option value="text" prop:selected=move || !vm.is_image()>
                            {locale.t("admin.type.text")}
                        </option>
                        <option value="image" prop:selected=move || vm.is_image()>
                            {locale.t("admin.type.image")}
                        </option>
                    </select>
                </div>

                <Show
                    when=move || vm.is_image()
                    fallback=move || view! {
                        <div class="form-group" dir="rtl">
                            <label for="value_ar">{locale.t("admin.value.ar")}</label>
                            <textarea
                                id="value_ar"
                                rows="3"
                                prop:value=move || vm.form.with(|f| f.ar.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.ar = value);
                                }
                            />
                        </div>
                        <div class="form-group" dir="ltr">
                            <label for="value_fr">{locale.t("admin.value.fr")}</label>
                            <textarea
                                id="value_fr"
                                rows="3"
                                prop:value=move || vm.form.with(|f| f.fr.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| f.fr = value);
                                }
                            />
                        </div>
                    }
                >
                    <div class="form-group">
                        <label for="value_url">{locale.t("admin.value.url")}</label>
                        <input
                            type="text"
                            id="value_url"
                            dir="ltr"
                            prop:value=move || vm.form.with(|f| f.url.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.url = value);
                            }
                        />
                        <ImageUpload
                            on_loaded=on_image_loaded
                            label=Signal::derive(locale.t("admin.upload"))
                        />
                        {move || {
                            let url = vm.form.with(|f| f.url.clone());
                            (!url.is_empty()).then(|| view! { <img class="image-preview" src=url alt="" /> })
                        }}
                    </div>
                </Show>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { locale.tr("admin.save") } else { locale.tr("admin.create") }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {locale.t("admin.cancel")}
                </button>
            </div>
        </div>
    }
}
