//! Upload & Grade page

use crate::app::{navigate, use_app};
use crate::components::{
    progress_bar::ProgressBar, result_card::ResultCard, upload_area::UploadArea,
};
use crate::download::{download_report, now_iso};
use crate::timer::SimulationTimer;
use leptos::prelude::*;
use rubber_grading_common::{Page, Submission, UploadSession};

#[component]
pub fn UploadPage() -> impl IntoView {
    let app = use_app();
    let session = RwSignal::new(UploadSession::new());
    let timer = SimulationTimer::new(session);

    let image = Memo::new(move |_| session.with(|s| s.state().selected_image_data_url.clone()));
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));
    let is_processing = Memo::new(move |_| session.with(|s| s.is_processing()));
    let progress = Signal::derive(move || session.with(|s| s.progress_percent()));

    let on_file = move |file_name: String, data_url: String| {
        timer.stop();
        match session.try_update(|s| s.submit(&file_name, data_url)) {
            Some(Submission::Simulating(ticket)) => timer.start(ticket),
            Some(Submission::Graded(_)) | None => {}
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        timer.stop();
        session.update(|s| s.reset());
    };

    let on_download = move || {
        let (report, image) = session.with(|s| {
            (
                s.report(&now_iso()),
                s.state().selected_image_data_url.clone(),
            )
        });
        // nothing to report yet
        let Some(report) = report else {
            return;
        };
        if let Err(e) = download_report(&report, image.as_deref()) {
            gloo::console::error!("report download failed", e);
        }
    };

    view! {
        <section class="page upload-page">
            <button class="btn-ghost" on:click=move |_| navigate(app, Page::Home)>
                "← Back to Home"
            </button>

            <div class="page-title">
                <h1>"Upload & Grade Rubber Sheet"</h1>
                <p class="text-muted">
                    "Upload a clear image of your rubber sheet for AI-powered quality assessment"
                </p>
            </div>

            <div class="grid-2">
                <div class="card">
                    <h2>"Upload Image"</h2>
                    <p class="text-muted">
                        "Drag and drop or click to select an image of your rubber sheet"
                    </p>
                    {move || match image.get() {
                        None => view! { <UploadArea on_file=on_file /> }.into_any(),
                        Some(url) => view! {
                            <div class="preview">
                                <img src=url alt="Uploaded rubber sheet" class="preview-image" />
                                <Show when=move || is_processing.get()>
                                    <ProgressBar progress=progress />
                                    <p class="text-muted">"AI is analyzing your rubber sheet quality"</p>
                                </Show>
                                <button class="btn btn-outline" on:click=on_reset>
                                    "Upload Different Image"
                                </button>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>

                <div class="card">
                    <h2>"Grading Results"</h2>
                    <p class="text-muted">"AI-powered quality assessment and pricing"</p>
                    {move || match result.get() {
                        None => view! {
                            <p class="empty-state">"Upload an image to see grading results"</p>
                        }
                        .into_any(),
                        Some(result) => view! {
                            <ResultCard
                                result=result
                                on_download=on_download
                                on_history=move || navigate(app, Page::Dashboard)
                            />
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}
