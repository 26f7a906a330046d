//! Header component

use crate::app::{navigate, use_app};
use leptos::prelude::*;
use rubber_grading_common::content::SITE_NAME;
use rubber_grading_common::navigation::HEADER_LINKS;
use rubber_grading_common::Page;

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let current_page = move || app.with(|state| state.current_page);
    let user_name = move || app.with(|state| state.user.as_ref().map(|u| u.name.clone()));

    let links = HEADER_LINKS
        .iter()
        .map(|link| {
            let page = link.page();
            let label = link.label;
            view! {
                <button
                    class="nav-link"
                    class:active=move || current_page() == page
                    on:click=move |_| navigate(app, page)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        app.update(|state| state.logout());
        crate::app::scroll_to_top();
    };

    view! {
        <header class="header">
            <button class="logo" on:click=move |_| navigate(app, Page::Home)>
                {SITE_NAME}
            </button>
            <nav class="nav">{links}</nav>
            <div class="auth">
                <Show
                    when=move || user_name().is_some()
                    fallback=move || view! {
                        <button class="btn btn-primary" on:click=move |_| navigate(app, Page::Login)>
                            "Login"
                        </button>
                    }
                >
                    <button class="btn" on:click=move |_| navigate(app, Page::Dashboard)>
                        "Dashboard"
                    </button>
                    <span class="user-name">{move || user_name().unwrap_or_default()}</span>
                    <button class="btn btn-secondary" on:click=on_logout>"Logout"</button>
                </Show>
            </div>
        </header>
    }
}
