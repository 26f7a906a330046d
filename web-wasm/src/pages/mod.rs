pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod technology;
pub mod upload;

use crate::app::{navigate, AppContext};
use leptos::prelude::*;
use rubber_grading_common::content::Feature;
use rubber_grading_common::Page;

/// Green banner with navigation buttons at the bottom of a page
fn call_to_action(
    app: AppContext,
    title: &'static str,
    body: &'static str,
    buttons: &[(&'static str, Page)],
) -> impl IntoView {
    let buttons = buttons
        .iter()
        .map(|&(label, page)| {
            view! {
                <button class="btn btn-light" on:click=move |_| navigate(app, page)>
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="cta">
            <h2>{title}</h2>
            <p>{body}</p>
            <div class="cta-buttons">{buttons}</div>
        </div>
    }
}

fn feature_cards(features: &[Feature]) -> impl IntoView {
    features
        .iter()
        .map(|feature| {
            let (title, description) = (feature.title, feature.description);
            view! {
                <div class="card feature-card">
                    <h3>{title}</h3>
                    <p class="text-muted">{description}</p>
                </div>
            }
        })
        .collect_view()
}
