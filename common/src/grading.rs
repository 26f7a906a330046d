//! Filename lookup and the fixed fallback result
//!
//! Grading here is a deterministic table lookup on the uploaded file name.
//! Anything without a recognised token gets the simulated-pipeline result.

use crate::types::{Grade, GradingResult};
use std::time::Duration;

/// Period of one simulated progress tick
pub const SIMULATION_INTERVAL: Duration = Duration::from_millis(200);

/// Progress added per tick
pub const PROGRESS_STEP: u8 = 10;

/// A fixed row of the filename lookup table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilenamePreset {
    pub token: &'static str,
    pub grade: Grade,
    pub moisture_percent: f64,
    pub price_per_kg: u32,
    pub quality_label: &'static str,
    pub remarks: &'static str,
}

impl FilenamePreset {
    pub fn to_result(&self) -> GradingResult {
        GradingResult {
            grade: self.grade,
            moisture_percent: self.moisture_percent,
            price_per_kg: self.price_per_kg,
            quality_label: self.quality_label.to_string(),
            remarks: self.remarks.to_string(),
        }
    }
}

/// Checked in this order; the first token found wins. There is no rss5 row.
pub const FILENAME_PRESETS: [FilenamePreset; 4] = [
    FilenamePreset {
        token: "rss1",
        grade: Grade::Rss1,
        moisture_percent: 2.0,
        price_per_kg: 200,
        quality_label: "Premium",
        remarks: "Detected RSS1 from filename",
    },
    FilenamePreset {
        token: "rss2",
        grade: Grade::Rss2,
        moisture_percent: 4.0,
        price_per_kg: 170,
        quality_label: "Good",
        remarks: "Detected RSS2 from filename",
    },
    FilenamePreset {
        token: "rss3",
        grade: Grade::Rss3,
        moisture_percent: 8.0,
        price_per_kg: 140,
        quality_label: "Average",
        remarks: "Detected RSS3 from filename",
    },
    FilenamePreset {
        token: "rss4",
        grade: Grade::Rss4,
        moisture_percent: 10.0,
        price_per_kg: 110,
        quality_label: "Below Average",
        remarks: "Detected RSS4 from filename",
    },
];

/// Find the preset whose token appears in the file name (case-insensitive)
pub fn preset_for_file_name(file_name: &str) -> Option<&'static FilenamePreset> {
    if file_name.is_empty() {
        return None;
    }
    let lowered = file_name.to_lowercase();
    FILENAME_PRESETS
        .iter()
        .find(|preset| lowered.contains(preset.token))
}

/// Result derived from the file name, if it carries an rss1..rss4 token
pub fn result_from_file_name(file_name: &str) -> Option<GradingResult> {
    preset_for_file_name(file_name).map(FilenamePreset::to_result)
}

/// The result emitted when the simulated pipeline finishes. Identical every time.
pub fn simulated_result() -> GradingResult {
    GradingResult {
        grade: Grade::Rss1,
        moisture_percent: 12.5,
        price_per_kg: 185,
        quality_label: "Premium".to_string(),
        remarks: "Excellent quality rubber sheet with optimal moisture content".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_sample_rss3() {
        let result = result_from_file_name("sample_RSS3_final.jpg").expect("should match");
        assert_eq!(result.grade, Grade::Rss3);
        assert_eq!(result.moisture_percent, 8.0);
        assert_eq!(result.price_per_kg, 140);
        assert_eq!(result.quality_label, "Average");
        assert_eq!(result.remarks, "Detected RSS3 from filename");
    }

    #[test]
    fn test_every_row_matches_anywhere_in_name() {
        let cases = [
            ("RSS1.png", Grade::Rss1, 200),
            ("batch-rss2", Grade::Rss2, 170),
            ("xRsS3y.jpeg", Grade::Rss3, 140),
            ("farm/2024/rss4_sheet.PNG", Grade::Rss4, 110),
        ];
        for (name, grade, price) in cases {
            let result = result_from_file_name(name).expect(name);
            assert_eq!(result.grade, grade, "{}", name);
            assert_eq!(result.price_per_kg, price, "{}", name);
        }
    }

    #[test]
    fn test_first_token_in_table_order_wins() {
        // rss4 appears first in the string, but rss1 is checked first
        let result = result_from_file_name("rss4_then_rss1.jpg").unwrap();
        assert_eq!(result.grade, Grade::Rss1);
    }

    #[test]
    fn test_no_match() {
        assert!(result_from_file_name("photo123.png").is_none());
        assert!(result_from_file_name("rss5_sheet.jpg").is_none());
        assert!(result_from_file_name("").is_none());
        assert!(result_from_file_name("rss_1.jpg").is_none());
    }

    #[test]
    fn test_simulated_result_is_fixed() {
        let a = simulated_result();
        let b = simulated_result();
        assert_eq!(a, b);
        assert_eq!(a.grade, Grade::Rss1);
        assert_eq!(a.moisture_percent, 12.5);
        assert_eq!(a.price_per_kg, 185);
        assert_eq!(a.quality_label, "Premium");
        assert!(a.remarks.starts_with("Excellent quality"));
    }
}
