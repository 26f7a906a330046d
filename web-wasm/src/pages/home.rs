use crate::app::{navigate, use_app};
use crate::components::grade_badge::GradeBadge;
use leptos::prelude::*;
use rubber_grading_common::content::{HERO_STATS, HERO_SUMMARY};
use rubber_grading_common::{Grade, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();

    let stats = HERO_STATS
        .iter()
        .map(|stat| {
            let (value, label) = (stat.value, stat.label);
            view! {
                <div class="hero-stat">
                    <div class="stat-value">{value}</div>
                    <div class="text-muted">{label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="page hero">
            <div class="grid-2">
                <div>
                    <h1>
                        "Smart Rubber Sheet"
                        <span class="accent block">"Grading & Pricing"</span>
                        <span class="block">"System"</span>
                    </h1>
                    <p class="lead">{HERO_SUMMARY}</p>
                    <div class="hero-buttons">
                        <button class="btn btn-primary" on:click=move |_| navigate(app, Page::Login)>
                            "Get Started"
                        </button>
                        <button class="btn btn-outline" on:click=move |_| navigate(app, Page::Technology)>
                            "Learn More"
                        </button>
                    </div>
                    <div class="hero-stats">{stats}</div>
                </div>
                <div class="hero-sample card">
                    <div class="sample-row">
                        <span>"RSS Grade: "</span>
                        <GradeBadge grade=Grade::Rss1 />
                    </div>
                    <div class="text-muted">"Moisture: 12%"</div>
                    <div class="sample-row">"Price: ₹185/kg"</div>
                    <div class="text-muted">"Market Rate"</div>
                </div>
            </div>
        </section>
    }
}
