use super::{call_to_action, feature_cards};
use crate::app::use_app;
use crate::components::grade_badge::GradeBadge;
use leptos::prelude::*;
use rubber_grading_common::content::{GRADE_BANDS, HARDWARE, SOFTWARE, WORKFLOW, WORKFLOW_DIAGRAM};
use rubber_grading_common::Page;

#[component]
pub fn TechnologyPage() -> impl IntoView {
    let app = use_app();

    let hardware = HARDWARE
        .iter()
        .map(|item| {
            let specs = item
                .specs
                .iter()
                .map(|&spec| view! { <li>{spec}</li> })
                .collect_view();
            let (name, description) = (item.name, item.description);
            view! {
                <div class="card">
                    <h3>{name}</h3>
                    <p class="text-muted">{description}</p>
                    <ul class="specs">{specs}</ul>
                </div>
            }
        })
        .collect_view();

    let workflow = WORKFLOW
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let (title, description) = (step.title, step.description);
            view! {
                <div class="card workflow-step">
                    <span class="step-number">{i + 1}</span>
                    <h3>{title}</h3>
                    <p class="text-muted">{description}</p>
                </div>
            }
        })
        .collect_view();

    let bands = GRADE_BANDS
        .iter()
        .map(|band| {
            let (description, price_range) = (band.description, band.price_range);
            view! {
                <div class="band-row">
                    <GradeBadge grade=band.grade />
                    <span>{description}</span>
                    <span class="price">{price_range}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="page technology-page">
            <div class="page-title">
                <h1>"Technology Overview"</h1>
                <p class="text-muted">
                    "How the system works - combining image processing, sensor data, and AI for accurate grading"
                </p>
            </div>

            <div class="banner">
                <h2>"System Overview"</h2>
                <p>
                    "Our system uses a Raspberry Pi 4 with an integrated Pi Camera and DHT moisture \
                     sensors to capture and analyze rubber sheets. Image processing (OpenCV), sensor \
                     data (IoT) and machine learning (TensorFlow/PyTorch) together grade each sheet \
                     against international RSS standards."
                </p>
            </div>

            <h2 class="section-title">"Hardware Components"</h2>
            <div class="grid-3">{hardware}</div>

            <h2 class="section-title">"Advanced Tech Stack"</h2>
            <div class="grid-4">{feature_cards(&SOFTWARE)}</div>

            <h2 class="section-title">"Workflow Diagram"</h2>
            <p class="workflow-diagram">{WORKFLOW_DIAGRAM}</p>
            <div class="grid-4">{workflow}</div>

            <h2 class="section-title">"RSS Grading System Prices"</h2>
            <div class="card">{bands}</div>

            {call_to_action(
                app,
                "Ready to Try Our System?",
                "Upload your rubber sheet image and get instant AI-powered grading",
                &[("Upload & Grade Now", Page::Upload), ("Learn More About Us", Page::About)],
            )}
        </section>
    }
}
