//! Plain-text views for the terminal

use rubber_grading_common::content::{grade_band, GRADE_BANDS};
use rubber_grading_common::dashboard::{
    grade_distribution, recent_activity, DISTRIBUTION_GRADES,
};
use rubber_grading_common::{
    AppState, DashboardStats, DashboardTab, GradingResult, UploadRecord, FILENAME_PRESETS,
};
use std::fmt::Write;

pub fn result_summary(file_name: &str, result: &GradingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", file_name);
    let _ = writeln!(out, "  Grade:    {} ({})", result.grade, result.quality_label);
    let _ = writeln!(out, "  Moisture: {}%", result.moisture_percent);
    let _ = writeln!(out, "  Price:    ₹{}/kg", result.price_per_kg);
    let _ = writeln!(out, "  Remarks:  {}", result.remarks);
    out
}

fn history_row(record: &UploadRecord) -> String {
    format!(
        "{:<12} {:<6} {:<5} {:>5}%  ₹{:<4} {:<10} {}",
        record.date,
        record.time,
        record.grade,
        record.moisture_percent,
        record.price_per_kg,
        record.status,
        record.image
    )
}

pub fn dashboard(state: &AppState, tab: DashboardTab, records: &[UploadRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", state.dashboard_heading());
    let _ = writeln!(out, "{}", state.dashboard_greeting());
    let tabs: Vec<String> = DashboardTab::ALL
        .iter()
        .map(|t| if *t == tab { format!("[{}]", t) } else { t.to_string() })
        .collect();
    let _ = writeln!(out, "{}\n", tabs.join("  "));

    match tab {
        DashboardTab::Overview => {
            let stats = DashboardStats::from_records(records);
            let _ = writeln!(out, "Total Uploads:    {}", stats.total_uploads);
            let _ = writeln!(out, "Average Grade:    {}", stats.average_grade);
            let _ = writeln!(out, "Average Moisture: {}%", stats.average_moisture);
            let _ = writeln!(out, "Total Value:      ₹{}", stats.total_value);
            let _ = writeln!(out, "\nRecent Activity");
            for record in recent_activity(records) {
                let _ = writeln!(out, "  {}", history_row(record));
            }
        }
        DashboardTab::History => {
            let _ = writeln!(out, "Upload History ({} records)", records.len());
            for record in records {
                let _ = writeln!(out, "  {}", history_row(record));
            }
            let _ = writeln!(out, "\nDownload the files with `rubber-grade assets`.");
        }
        DashboardTab::Analytics => {
            let _ = writeln!(out, "Grade Distribution");
            for share in grade_distribution(records, &DISTRIBUTION_GRADES) {
                let _ = writeln!(
                    out,
                    "  {}: {} ({})",
                    share.grade,
                    share.count,
                    share.percentage_label()
                );
            }
            let _ = writeln!(out, "\nPrice Trends");
            let _ = writeln!(out, "  Charts coming soon");
        }
    }
    out
}

pub fn grades_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Grade bands");
    for band in &GRADE_BANDS {
        let _ = writeln!(out, "  {:<5} {:<12} {}", band.grade, band.price_range, band.description);
    }
    let _ = writeln!(out, "\nFilename tokens (first match wins)");
    for preset in &FILENAME_PRESETS {
        let _ = writeln!(
            out,
            "  {:<5} -> {} {:>4}% ₹{}/kg {:<13} band {}",
            preset.token,
            preset.grade,
            preset.moisture_percent,
            preset.price_per_kg,
            preset.quality_label,
            grade_band(preset.grade).price_range
        );
    }
    let _ = writeln!(out, "  other -> simulated run, always RSS1");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubber_grading_common::dashboard::sample_uploads;
    use rubber_grading_common::{LoginForm, Role};

    #[test]
    fn test_overview_shows_stats() {
        let text = dashboard(&AppState::new(), DashboardTab::Overview, &sample_uploads());
        assert!(text.starts_with("Farmer Dashboard\n"));
        assert!(text.contains("Average Grade:    RSS1.8"));
        assert!(text.contains("Total Value:      ₹898"));
        assert!(text.contains("[Overview]"));
        assert_eq!(text.matches("Completed").count(), 3);
    }

    #[test]
    fn test_history_lists_every_row() {
        let mut state = AppState::new();
        state.login(&LoginForm {
            role: Some(Role::Merchant),
            name: "Ravi".into(),
            ..Default::default()
        });
        let text = dashboard(&state, DashboardTab::History, &sample_uploads());
        assert!(text.starts_with("Merchant Dashboard\nWelcome back, Ravi!"));
        assert_eq!(text.matches("rubber_sheet_").count(), 5);
    }

    #[test]
    fn test_analytics_distribution() {
        let text = dashboard(&AppState::new(), DashboardTab::Analytics, &sample_uploads());
        assert!(text.contains("RSS1: 2 (40%)"));
        assert!(text.contains("RSS3: 1 (20%)"));
    }

    #[test]
    fn test_grades_table() {
        let text = grades_table();
        assert!(text.contains("₹185-190/kg"));
        assert!(text.contains("rss4"));
        assert!(!text.contains("rss5"));
    }
}
