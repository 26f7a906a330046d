use leptos::prelude::*;
use rubber_grading_common::Grade;

#[component]
pub fn GradeBadge(grade: Grade) -> impl IntoView {
    view! { <span class=grade.badge_class()>{grade.as_str()}</span> }
}
