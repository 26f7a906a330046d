use super::{call_to_action, feature_cards};
use crate::app::use_app;
use leptos::prelude::*;
use rubber_grading_common::content::{IMPACT_STATS, STORY, TEAM, VALUES};
use rubber_grading_common::Page;

#[component]
pub fn AboutPage() -> impl IntoView {
    let app = use_app();

    let story = STORY.iter().map(|&p| view! { <p>{p}</p> }).collect_view();

    let impact = IMPACT_STATS
        .iter()
        .map(|stat| {
            let (value, label) = (stat.value, stat.label);
            view! {
                <div class="impact-stat">
                    <span class="stat-value">{value}</span>
                    <span class="text-muted">{label}</span>
                </div>
            }
        })
        .collect_view();

    let team = TEAM
        .iter()
        .map(|member| {
            let (name, role) = (member.name, member.role);
            view! {
                <div class="card team-card">
                    <h3>{name}</h3>
                    <p class="text-muted">{role}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="page about-page">
            <div class="page-title">
                <h1>"Our Story"</h1>
            </div>

            <div class="grid-2">
                <div>
                    <h2>"The Beginning"</h2>
                    {story}
                </div>
                <div class="card">
                    <h3>"Impact to Date"</h3>
                    {impact}
                </div>
            </div>

            <h2 class="section-title">"What Drives Us"</h2>
            <div class="grid-4">{feature_cards(&VALUES)}</div>

            <h2 class="section-title">"Meet Our Team"</h2>
            <div class="grid-4">{team}</div>

            {call_to_action(
                app,
                "Ready to Experience Fair Grading?",
                "Join us in revolutionizing rubber sheet grading with technology",
                &[("Try Now", Page::Upload), ("Contact Us", Page::Contact)],
            )}
        </section>
    }
}
