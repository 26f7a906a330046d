use crate::error::{GradingError, Result};
use rubber_grading_common::upload::mime_type_for_file_name;
use rubber_grading_common::{UploadSource, UploadedFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageInfo {
    fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_type_for_file_name(&file_name).to_string();
        Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        }
    }

    pub async fn read(&self) -> Result<UploadedFile> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(UploadedFile {
            name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            bytes,
        })
    }
}

/// Expands CLI inputs into the files to grade.
///
/// A file named directly is taken as-is, like the file picker. A folder is
/// treated like a drop of its direct children: non-images are skipped.
pub fn scan_inputs(inputs: &[PathBuf]) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();
    for input in inputs {
        if input.is_dir() {
            images.extend(scan_folder(input)?);
        } else if input.is_file() {
            images.push(ImageInfo::from_path(input));
        } else {
            return Err(GradingError::FileNotFound(input.display().to_string()));
        }
    }
    Ok(images)
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(GradingError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| ImageInfo::from_path(entry.path()))
        .filter(|info| UploadSource::Drop.accepts(&info.mime_type))
        .collect();

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(GradingError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_skips_non_images() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("rss2.JPG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("a.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("notes.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "rss2.JPG"]);
        assert_eq!(result[1].mime_type, "image/jpeg");
    }

    #[test]
    fn test_explicit_file_is_not_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "text").unwrap();

        let result = scan_inputs(&[path]).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].mime_type, "application/octet-stream");
    }

    #[test]
    fn test_missing_input() {
        let result = scan_inputs(&[PathBuf::from("/nonexistent/rss1.jpg")]);
        assert!(matches!(result, Err(GradingError::FileNotFound(_))));
    }
}
