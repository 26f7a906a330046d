//! Grading result card

use crate::components::grade_badge::GradeBadge;
use leptos::prelude::*;
use rubber_grading_common::GradingResult;

#[component]
pub fn ResultCard<D, H>(result: GradingResult, on_download: D, on_history: H) -> impl IntoView
where
    D: Fn() + Send + Sync + 'static,
    H: Fn() + Send + Sync + 'static,
{
    let moisture_width = format!("width: {}%", result.moisture_percent.min(100.0));

    view! {
        <div class="result-card">
            <div class="result-grade">
                <span class="text-muted">"Grade"</span>
                <GradeBadge grade=result.grade />
                <div class="text-muted">"Quality: "{result.quality_label.clone()}</div>
            </div>
            <div class="result-moisture">
                <span class="text-muted">"Moisture Content"</span>
                <span>{format!("{}%", result.moisture_percent)}</span>
                <div class="meter"><div class="meter-fill" style=moisture_width /></div>
            </div>
            <div class="result-price">
                <span class="text-muted">"Current Market Price"</span>
                <span class="price">{format!("₹{}/kg", result.price_per_kg)}</span>
                <div class="text-muted">"Based on current market rates"</div>
            </div>
            <div class="result-remarks">
                <h4>"Remarks"</h4>
                <p>{result.remarks.clone()}</p>
            </div>
            <div class="result-actions">
                <button class="btn btn-primary" on:click=move |_| on_download()>
                    "Download Report"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_history()>
                    "View History"
                </button>
            </div>
        </div>
    }
}
