//! Footer component

use crate::app::{navigate, use_app, AppContext};
use leptos::prelude::*;
use rubber_grading_common::content::{CONTACT_CHANNELS, LEGAL_LINKS, SITE_NAME, TAGLINE};
use rubber_grading_common::navigation::{NavLink, FOOTER_QUICK_LINKS, FOOTER_RESOURCES};

fn link_list(app: AppContext, links: &[NavLink]) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            let page = link.page();
            let label = link.label;
            view! {
                <li>
                    <button class="footer-link" on:click=move |_| navigate(app, page)>
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view()
}

#[component]
pub fn Footer() -> impl IntoView {
    let app = use_app();

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            let (label, value) = (channel.label, channel.value);
            view! { <li>{label}": "{value}</li> }
        })
        .collect_view();

    let legal = LEGAL_LINKS
        .iter()
        .map(|&label| view! { <span class="legal-link">{label}</span> })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3>{SITE_NAME}</h3>
                    <p class="text-muted">{TAGLINE}</p>
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <ul>{link_list(app, &FOOTER_QUICK_LINKS)}</ul>
                </div>
                <div>
                    <h4>"Resources"</h4>
                    <ul>{link_list(app, &FOOTER_RESOURCES)}</ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <ul>{channels}</ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2025 "{SITE_NAME}". All rights reserved."</p>
                <div class="legal">{legal}</div>
            </div>
        </footer>
    }
}
