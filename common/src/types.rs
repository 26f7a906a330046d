//! Grading result types
//!
//! Shared by the CLI and the web app:
//! - Grade: the five RSS tiers
//! - GradingResult: one canned grading outcome
//! - UploadSessionState: the upload widget's observable state

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ribbed smoked sheet grade, RSS1 (best) to RSS5 (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Rss1,
    Rss2,
    Rss3,
    Rss4,
    Rss5,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::Rss1, Grade::Rss2, Grade::Rss3, Grade::Rss4, Grade::Rss5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Rss1 => "RSS1",
            Grade::Rss2 => "RSS2",
            Grade::Rss3 => "RSS3",
            Grade::Rss4 => "RSS4",
            Grade::Rss5 => "RSS5",
        }
    }

    /// Ordinal rank, 1 for RSS1
    pub fn rank(&self) -> u8 {
        match self {
            Grade::Rss1 => 1,
            Grade::Rss2 => 2,
            Grade::Rss3 => 3,
            Grade::Rss4 => 4,
            Grade::Rss5 => 5,
        }
    }

    /// CSS class of the coloured grade badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Grade::Rss1 => "grade-badge grade-rss1",
            Grade::Rss2 => "grade-badge grade-rss2",
            Grade::Rss3 => "grade-badge grade-rss3",
            Grade::Rss4 => "grade-badge grade-rss4",
            Grade::Rss5 => "grade-badge grade-rss5",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rss1" | "1" => Ok(Grade::Rss1),
            "rss2" | "2" => Ok(Grade::Rss2),
            "rss3" | "3" => Ok(Grade::Rss3),
            "rss4" | "4" => Ok(Grade::Rss4),
            "rss5" | "5" => Ok(Grade::Rss5),
            _ => Err(Error::UnknownGrade(s.to_string())),
        }
    }
}

/// One grading outcome. Never produced by real analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub grade: Grade,
    pub moisture_percent: f64,
    pub price_per_kg: u32,
    pub quality_label: String,
    pub remarks: String,
}

/// Observable state of the upload widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSessionState {
    pub selected_image_data_url: Option<String>,
    pub selected_file_name: Option<String>,
    pub is_processing: bool,
    /// 0..=100
    pub progress_percent: u8,
    pub result: Option<GradingResult>,
}

impl UploadSessionState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
