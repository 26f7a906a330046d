//! Client-side downloads
//!
//! Everything is saved through a temporary object URL on an `<a download>`.

use rubber_grading_common::report::REPORT_MIME_TYPE;
use rubber_grading_common::{decode_data_url, AssetRequest, GradingReport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Response, Url};

fn save_blob(blob: &Blob, file_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let url = Url::create_object_url_with_blob(blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)
}

pub fn save_text(file_name: &str, text: &str, mime_type: &str) -> Result<(), JsValue> {
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    save_blob(&blob, file_name)
}

/// Re-saves a data URL as a binary file
pub fn save_data_url(file_name: &str, data_url: &str) -> Result<(), JsValue> {
    let (mime_type, bytes) =
        decode_data_url(data_url).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let options = BlobPropertyBag::new();
    options.set_type(&mime_type);
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    save_blob(&blob, file_name)
}

/// Report text, then the uploaded image. A failed image save is logged
/// only; the report has already been handed to the browser.
pub fn download_report(report: &GradingReport, image_data_url: Option<&str>) -> Result<(), JsValue> {
    save_text(&report.report_file_name(), &report.render(), REPORT_MIME_TYPE)?;

    if let Some(data_url) = image_data_url {
        if let Err(e) = save_data_url(&report.image_file_name(), data_url) {
            gloo::console::error!("image download failed", e);
        }
    }
    Ok(())
}

/// Fetches a static file relative to the page origin and saves it
pub async fn fetch_and_save(request: &AssetRequest) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(&request.path)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "{} returned {}",
            request.path,
            resp.status()
        )));
    }

    let blob: Blob = JsFuture::from(resp.blob()?).await?.dyn_into()?;
    save_blob(&blob, &request.file_name)
}

/// Fire-and-forget asset download; failures go to the console
pub fn spawn_asset_download(request: AssetRequest) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = fetch_and_save(&request).await {
            gloo::console::error!("asset download failed", request.path.clone(), e);
        }
    });
}

/// Browser timestamp in the report format, e.g. `2024-01-15T14:30:00.000Z`
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn now_iso_has_report_shape() {
        let ts = now_iso();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
    }

    #[wasm_bindgen_test]
    fn bad_data_url_is_an_error() {
        assert!(save_data_url("x.png", "not a data url").is_err());
    }
}
