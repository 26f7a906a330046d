//! Mock dashboard over the hard-coded upload history

use crate::app::{navigate, use_app};
use crate::components::grade_badge::GradeBadge;
use crate::download::spawn_asset_download;
use leptos::prelude::*;
use rubber_grading_common::dashboard::{
    grade_distribution, recent_activity, sample_uploads, DISTRIBUTION_GRADES,
};
use rubber_grading_common::{AssetRequest, DashboardStats, DashboardTab, Page, UploadRecord};

fn stat_card(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <p class="text-muted">{label}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}

fn overview(records: &[UploadRecord]) -> impl IntoView {
    let stats = DashboardStats::from_records(records);
    let recent = recent_activity(records)
        .iter()
        .map(|upload| {
            view! {
                <div class="activity-row">
                    <div>
                        <p>{upload.image.clone()}</p>
                        <p class="text-muted">{format!("{} at {}", upload.date, upload.time)}</p>
                    </div>
                    <GradeBadge grade=upload.grade />
                    <span class="price">{format!("₹{}/kg", upload.price_per_kg)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid-4">
            {stat_card("Total Uploads", stats.total_uploads.to_string())}
            {stat_card("Average Grade", stats.average_grade.clone())}
            {stat_card("Avg. Moisture", format!("{}%", stats.average_moisture))}
            {stat_card("Total Value", format!("₹{}", stats.total_value))}
        </div>
        <div class="card">
            <h3>"Recent Activity"</h3>
            <p class="text-muted">"Your latest rubber sheet gradings"</p>
            {recent}
        </div>
    }
}

fn history(records: &[UploadRecord]) -> impl IntoView {
    let rows = records
        .iter()
        .map(|upload| {
            let request = AssetRequest::record_image(upload);
            view! {
                <tr>
                    <td>
                        <div>{upload.date.clone()}</div>
                        <div class="text-muted">{upload.time.clone()}</div>
                    </td>
                    <td>{upload.image.clone()}</td>
                    <td><GradeBadge grade=upload.grade /></td>
                    <td>{format!("{}%", upload.moisture_percent)}</td>
                    <td class="price">{format!("₹{}", upload.price_per_kg)}</td>
                    <td><span class="status-badge">{upload.status.clone()}</span></td>
                    <td>
                        <button
                            class="btn-ghost"
                            on:click=move |_| spawn_asset_download(request.clone())
                        >
                            "Download"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <div class="card-header">
                <div>
                    <h3>"Upload History"</h3>
                    <p class="text-muted">"Complete record of all your rubber sheet gradings"</p>
                </div>
                <div class="actions">
                    <button
                        class="btn btn-outline"
                        on:click=|_| spawn_asset_download(AssetRequest::samples_csv())
                    >
                        "Export CSV"
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=|_| spawn_asset_download(AssetRequest::users_json())
                    >
                        "Users"
                    </button>
                </div>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Image"</th>
                        <th>"Grade"</th>
                        <th>"Moisture %"</th>
                        <th>"Price (₹/kg)"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn analytics(records: &[UploadRecord]) -> impl IntoView {
    let shares = grade_distribution(records, &DISTRIBUTION_GRADES)
        .into_iter()
        .map(|share| {
            let width = format!("width: {}%", share.percentage);
            view! {
                <div class="distribution-row">
                    <GradeBadge grade=share.grade />
                    <div class="meter"><div class="meter-fill" style=width /></div>
                    <span>{format!("{} ({})", share.count, share.percentage_label())}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid-2">
            <div class="card">
                <h3>"Grade Distribution"</h3>
                <p class="text-muted">"Breakdown of your rubber sheet grades"</p>
                {shares}
            </div>
            <div class="card">
                <h3>"Quality Trends"</h3>
                <p class="text-muted">"Your rubber sheet quality over time"</p>
                <div class="placeholder">
                    <p>"Chart visualization would go here"</p>
                    <p class="text-muted">"Connect to see detailed analytics"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let records = StoredValue::new(sample_uploads());
    let (tab, set_tab) = signal(DashboardTab::default());

    let heading = move || app.with(|state| state.dashboard_heading());
    let greeting = move || app.with(|state| state.dashboard_greeting());

    let tab_buttons = DashboardTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class="tab"
                    class:active=move || tab.get() == t
                    on:click=move |_| set_tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="page dashboard-page">
            <div class="dashboard-header">
                <div>
                    <button class="btn-ghost" on:click=move |_| navigate(app, Page::Home)>
                        "← Back to Home"
                    </button>
                    <h1>{heading}</h1>
                    <p class="text-muted">{greeting}</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| navigate(app, Page::Upload)>
                    "New Upload"
                </button>
            </div>

            <div class="tabs">{tab_buttons}</div>

            {move || records.with_value(|records| match tab.get() {
                DashboardTab::Overview => overview(records).into_any(),
                DashboardTab::History => history(records).into_any(),
                DashboardTab::Analytics => analytics(records).into_any(),
            })}
        </section>
    }
}
