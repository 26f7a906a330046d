//! Plain-text grading report

use crate::types::GradingResult;

pub const REPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// A rendered-on-demand report for one result
#[derive(Debug, Clone, PartialEq)]
pub struct GradingReport {
    pub result: GradingResult,
    /// Original upload name, if known
    pub file_name: Option<String>,
    /// ISO-8601 timestamp, e.g. `2024-01-15T14:30:00.000Z`
    pub generated_at: String,
}

impl GradingReport {
    pub fn new(result: GradingResult, file_name: Option<String>, generated_at: &str) -> Self {
        Self {
            result,
            file_name,
            generated_at: generated_at.to_string(),
        }
    }

    /// `rubber_report_<GRADE>_<timestamp with : and . replaced>`
    pub fn base_name(&self) -> String {
        let safe_ts = self.generated_at.replace([':', '.'], "-");
        format!("rubber_report_{}_{}", self.result.grade, safe_ts)
    }

    pub fn report_file_name(&self) -> String {
        format!("{}.txt", self.base_name())
    }

    /// Name the uploaded image is saved under
    pub fn image_file_name(&self) -> String {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}.png", self.base_name()),
        }
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![
            "Rubber Grading Report".to_string(),
            "====================".to_string(),
            format!("Generated: {}", self.generated_at),
        ];
        if let Some(name) = self.file_name.as_deref().filter(|n| !n.is_empty()) {
            lines.push(format!("Uploaded file: {}", name));
        }
        lines.push(String::new());
        lines.push(format!("Grade: {}", self.result.grade));
        lines.push(format!("Quality: {}", self.result.quality_label));
        lines.push(format!("Moisture: {}", self.result.moisture_percent));
        lines.push(format!("Price (₹/kg): {}", self.result.price_per_kg));
        lines.push(String::new());
        lines.push("Remarks:".to_string());
        lines.push(self.result.remarks.clone());
        lines.push(String::new());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{result_from_file_name, simulated_result};

    const TS: &str = "2024-01-15T14:30:00.000Z";

    #[test]
    fn test_render_with_file_name() {
        let result = result_from_file_name("sample_RSS3_final.jpg").unwrap();
        let report = GradingReport::new(result, Some("sample_RSS3_final.jpg".to_string()), TS);

        let expected = "Rubber Grading Report\n\
                        ====================\n\
                        Generated: 2024-01-15T14:30:00.000Z\n\
                        Uploaded file: sample_RSS3_final.jpg\n\
                        \n\
                        Grade: RSS3\n\
                        Quality: Average\n\
                        Moisture: 8\n\
                        Price (₹/kg): 140\n\
                        \n\
                        Remarks:\n\
                        Detected RSS3 from filename\n";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_render_without_file_name() {
        let report = GradingReport::new(simulated_result(), None, TS);
        let text = report.render();
        assert!(!text.contains("Uploaded file"));
        assert!(text.contains("Moisture: 12.5\n"));
        assert!(text.contains("Price (₹/kg): 185\n"));
        assert!(text.ends_with("optimal moisture content\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = GradingReport::new(simulated_result(), Some("a.jpg".into()), TS);
        let b = GradingReport::new(simulated_result(), Some("a.jpg".into()), TS);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_file_names() {
        let report = GradingReport::new(simulated_result(), None, TS);
        assert_eq!(report.base_name(), "rubber_report_RSS1_2024-01-15T14-30-00-000Z");
        assert_eq!(report.report_file_name(), "rubber_report_RSS1_2024-01-15T14-30-00-000Z.txt");
        assert_eq!(report.image_file_name(), "rubber_report_RSS1_2024-01-15T14-30-00-000Z.png");

        let named = GradingReport::new(simulated_result(), Some("farm.jpeg".into()), TS);
        assert_eq!(named.image_file_name(), "farm.jpeg");
    }
}
