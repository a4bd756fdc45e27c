//! Upload page: file selection, preview, and the guarded inference call
//!
//! Owns one UploadFlow state machine per mount. Exactly one network call per
//! accepted submission; rapid repeated triggers collapse inside the machine's
//! debounce window. No retry on failure, the user resubmits manually.

use crate::api::gemini;
use crate::config::AppConfig;
use ewaste_ai_common::{AnalysisResult, UploadFlow};
use gloo::console;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

#[component]
pub fn UploadPage() -> impl IntoView {
    let analysis =
        use_context::<RwSignal<Option<AnalysisResult>>>().expect("analysis result context");
    let config = use_context::<AppConfig>().expect("app config context");
    let api_key = config.api_key.clone();
    let configured = api_key.is_some();

    let flow = RwSignal::new(UploadFlow::new());
    let (is_dragover, set_is_dragover) = signal(false);
    let navigate = use_navigate();

    // RwSignal is Copy, so this closure can be reused by every handler
    let handle_file = move |file: File| {
        read_file_as_data_url(file, move |file_name, data_url| {
            flow.update(|f| f.select_file(file_name, data_url));
        });
    };

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| set_is_dragover.set(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(api_key) = api_key.clone() else {
            return;
        };

        let mut accepted = false;
        flow.update(|f| accepted = f.try_submit(js_sys::Date::now()));
        if !accepted {
            return;
        }

        let Some(data_url) = flow.with_untracked(|f| f.preview_url().map(str::to_string)) else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match gemini::analyze_image(&api_key, &data_url).await {
                Ok(result) => {
                    analysis.set(Some(result));
                    flow.update(|f| f.finish_success());
                    navigate("/results", Default::default());
                }
                Err(e) => {
                    console::error!(format!("image analysis failed: {:?}", e));
                    let message = e
                        .as_string()
                        .unwrap_or_else(|| "The analysis request failed. Please try again.".to_string());
                    flow.update(|f| f.fail(message));
                }
            }
        });
    };

    view! {
        <div class="upload-page">
            <h2>"Upload E-Waste Image"</h2>
            <form on:submit=on_submit>
                <div
                    class=move || {
                        if is_dragover.get() { "dropzone dragover" } else { "dropzone" }
                    }
                    on:drop=on_drop
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                >
                    {move || match flow.with(|f| f.preview_url().map(str::to_string)) {
                        Some(url) => view! {
                            <img src=url alt="Preview" class="preview"/>
                        }
                        .into_any(),
                        None => view! {
                            <p class="text-muted">"Click Select Image, or drag a photo here"</p>
                        }
                        .into_any(),
                    }}
                </div>
                <input
                    type="file"
                    accept="image/*"
                    id="image-upload"
                    class="hidden"
                    on:change=on_change
                />
                <label for="image-upload" class="btn btn-select">"Select Image"</label>
                <button
                    type="submit"
                    class="btn btn-analyze"
                    disabled=move || !configured || flow.with(|f| !f.can_submit())
                >
                    {move || {
                        if flow.with(|f| f.is_submitting()) {
                            "Analyzing..."
                        } else {
                            "Analyze Image"
                        }
                    }}
                </button>
            </form>
            {move || {
                flow.with(|f| f.error().map(str::to_string)).map(|message| view! {
                    <div class="banner banner-error">
                        <span>{message}</span>
                        <button
                            class="btn-dismiss"
                            on:click=move |_| flow.update(|f| f.dismiss_error())
                        >
                            "Dismiss"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}

/// Read a selected file into a base64 data URL, used for both the preview
/// and the inference payload
fn read_file_as_data_url<F>(file: File, on_loaded: F)
where
    F: Fn(String, String) + 'static,
{
    let file_name = file.name();
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(file_name.clone(), data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
