//! Mock dashboard: sample upload history, derived stats, static assets

use crate::error::{Error, Result};
use crate::types::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rows shown under "Recent Activity"
pub const RECENT_ACTIVITY_LEN: usize = 3;

/// Grades listed in the distribution card
pub const DISTRIBUTION_GRADES: [Grade; 3] = [Grade::Rss1, Grade::Rss2, Grade::Rss3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub grade: Grade,
    pub moisture_percent: f64,
    pub price_per_kg: u32,
    pub status: String,
    pub image: String,
}

fn record(id: u32, date: &str, time: &str, grade: Grade, moisture: f64, price: u32) -> UploadRecord {
    UploadRecord {
        id,
        date: date.to_string(),
        time: time.to_string(),
        grade,
        moisture_percent: moisture,
        price_per_kg: price,
        status: "Completed".to_string(),
        image: format!("rubber_sheet_{:03}.jpg", id),
    }
}

/// The hard-coded history rows
pub fn sample_uploads() -> Vec<UploadRecord> {
    vec![
        record(1, "2024-01-15", "14:30", Grade::Rss1, 12.5, 185),
        record(2, "2024-01-14", "11:15", Grade::Rss2, 15.2, 178),
        record(3, "2024-01-13", "16:45", Grade::Rss1, 11.8, 187),
        record(4, "2024-01-12", "09:20", Grade::Rss3, 18.1, 168),
        record(5, "2024-01-11", "13:55", Grade::Rss2, 14.7, 180),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_uploads: usize,
    /// e.g. `RSS1.8`
    pub average_grade: String,
    /// Rounded to one decimal
    pub average_moisture: f64,
    pub total_value: u32,
}

impl DashboardStats {
    pub fn from_records(records: &[UploadRecord]) -> Self {
        let total_uploads = records.len();
        if total_uploads == 0 {
            return Self {
                total_uploads,
                average_grade: "N/A".to_string(),
                average_moisture: 0.0,
                total_value: 0,
            };
        }

        let count = total_uploads as f64;
        let mean_rank = records.iter().map(|r| f64::from(r.grade.rank())).sum::<f64>() / count;
        let mean_moisture = records.iter().map(|r| r.moisture_percent).sum::<f64>() / count;

        Self {
            total_uploads,
            average_grade: format!("RSS{:.1}", mean_rank),
            average_moisture: (mean_moisture * 10.0).round() / 10.0,
            total_value: records.iter().map(|r| r.price_per_kg).sum(),
        }
    }
}

/// Share of one grade in the history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeShare {
    pub grade: Grade,
    pub count: usize,
    pub percentage: f64,
}

impl GradeShare {
    /// Whole-number label, e.g. `40%`
    pub fn percentage_label(&self) -> String {
        format!("{:.0}%", self.percentage)
    }
}

pub fn grade_distribution(records: &[UploadRecord], grades: &[Grade]) -> Vec<GradeShare> {
    grades
        .iter()
        .map(|&grade| {
            let count = records.iter().filter(|r| r.grade == grade).count();
            let percentage = if records.is_empty() {
                0.0
            } else {
                count as f64 / records.len() as f64 * 100.0
            };
            GradeShare { grade, count, percentage }
        })
        .collect()
}

pub fn recent_activity(records: &[UploadRecord]) -> &[UploadRecord] {
    &records[..records.len().min(RECENT_ACTIVITY_LEN)]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    History,
    Analytics,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Overview, DashboardTab::History, DashboardTab::Analytics];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::History => "History",
            DashboardTab::Analytics => "Analytics",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(DashboardTab::Overview),
            "history" => Ok(DashboardTab::History),
            "analytics" => Ok(DashboardTab::Analytics),
            _ => Err(Error::UnknownTab(s.to_string())),
        }
    }
}

/// A static file served next to the site, saved as an opaque blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    /// Site-absolute path, e.g. `/data/users.json`
    pub path: String,
    pub file_name: String,
}

impl AssetRequest {
    fn data_file(file_name: &str) -> Self {
        Self {
            path: format!("/data/{}", file_name),
            file_name: file_name.to_string(),
        }
    }

    pub fn samples_csv() -> Self {
        Self::data_file("rubber_samples.csv")
    }

    pub fn users_json() -> Self {
        Self::data_file("users.json")
    }

    pub fn record_image(record: &UploadRecord) -> Self {
        Self::data_file(&record.image)
    }

    /// Full URL under a site base such as `http://localhost:5173`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// Every download the history tab offers
pub fn asset_requests(records: &[UploadRecord]) -> Vec<AssetRequest> {
    let mut requests = vec![AssetRequest::samples_csv(), AssetRequest::users_json()];
    requests.extend(records.iter().map(AssetRequest::record_image));
    requests
}
