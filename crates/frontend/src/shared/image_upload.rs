//! Image upload widget: turns a selected file into a base64 data URL.

use base64::Engine;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

pub async fn read_file_as_data_url(file: web_sys::File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(to_data_url(&file.type_(), &bytes))
}

#[component]
pub fn ImageUpload(
    /// Receives the data URL of the chosen file
    on_loaded: Callback<String>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match read_file_as_data_url(file).await {
                Ok(url) => on_loaded.run(url),
                Err(e) => log::error!("Failed to read image: {}", e),
            }
        });
    };

    view! {
        <label class="image-upload">
            <span>{move || label.get()}</span>
            <input type="file" accept="image/*" on:change=on_change />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_bytes_with_mime() {
        assert_eq!(to_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn unknown_mime_falls_back_to_octet_stream() {
        assert!(to_data_url("", b"").starts_with("data:application/octet-stream;base64,"));
    }
}
