//! Upload area component

use leptos::prelude::*;
use rubber_grading_common::{first_acceptable, UploadSource};
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement};

/// Drop zone plus hidden file picker. Hands `(file name, data URL)` of the
/// first acceptable file to `on_file`.
#[component]
pub fn UploadArea<F>(on_file: F) -> impl IntoView
where
    F: Fn(String, String) + Clone + Send + Sync + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    let handle_files = move |source: UploadSource, files: FileList| {
        if let Some(file) = pick_file(source, &files) {
            read_file(file, on_file.clone());
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(UploadSource::Drop, files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            handle_files(UploadSource::Picker, files);
        }
        // picking the same file again should fire change
        input.set_value("");
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drop your image here"</p>
            <p class="text-muted">"or click to browse"</p>
            <button class="btn btn-outline" type="button">"Choose File"</button>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
        </div>
    }
}

fn pick_file(source: UploadSource, files: &FileList) -> Option<File> {
    let mime_types: Vec<String> = (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|f| f.type_())
        .collect();
    let index = first_acceptable(source, mime_types.iter().map(String::as_str))?;
    files.get(index as u32)
}

fn read_file<F>(file: File, on_file: F)
where
    F: Fn(String, String) + 'static,
{
    let file_name = file.name();
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!("FileReader unavailable", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let onload = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|r| r.as_string()) {
            Some(data_url) => on_file(file_name, data_url),
            None => gloo::console::error!("could not read", file_name),
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(&file) {
        gloo::console::error!("read_as_data_url failed", e);
    }
}
