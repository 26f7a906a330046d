//! Report download: the text report plus a copy of the graded image

use crate::error::{GradingError, Result};
use rubber_grading_common::{decode_data_url, GradingReport};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFiles {
    pub report: PathBuf,
    /// `None` when the image could not be saved
    pub image: Option<PathBuf>,
}

/// Writes `<base>.txt` into `dir`, then the image.
///
/// The image is best effort: a bad data URL or a failed write is logged
/// and leaves the text report in place.
pub fn write_report(
    report: &GradingReport,
    image_data_url: Option<&str>,
    dir: &Path,
) -> Result<ReportFiles> {
    if dir.exists() && !dir.is_dir() {
        return Err(GradingError::Report(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    std::fs::create_dir_all(dir)?;

    let report_path = dir.join(report.report_file_name());
    std::fs::write(&report_path, report.render())?;
    tracing::info!(path = %report_path.display(), "report saved");

    let image = image_data_url.and_then(|url| {
        let path = dir.join(report.image_file_name());
        match save_image(url, &path) {
            Ok(()) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "image download failed, report kept");
                None
            }
        }
    });

    Ok(ReportFiles {
        report: report_path,
        image,
    })
}

fn save_image(data_url: &str, path: &Path) -> Result<()> {
    let (_, bytes) = decode_data_url(data_url)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
