//! Main application component

use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage,
    login::LoginPage, technology::TechnologyPage, upload::UploadPage,
};
use leptos::prelude::*;
use rubber_grading_common::{AppState, Page};

/// Shell state shared with every page through context
pub type AppContext = RwSignal<AppState>;

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Switches the rendered page and scrolls back to the top
pub fn navigate(app: AppContext, page: Page) {
    app.update(|state| state.navigate(page));
    scroll_to_top();
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let app: AppContext = RwSignal::new(AppState::new());
    provide_context(app);

    let current_page = move || app.with(|state| state.current_page);

    view! {
        <div class="app">
            <Header />
            <main class="main-content">
                {move || match current_page() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Login => view! { <LoginPage /> }.into_any(),
                    Page::Upload => view! { <UploadPage /> }.into_any(),
                    Page::Technology => view! { <TechnologyPage /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
