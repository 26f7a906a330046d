//! Upload inputs: files, data URLs and the drop filter

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

const DEFAULT_MIME: &str = "application/octet-stream";

/// A user-selected file. Only the name and the raw bytes are consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Builds a file, guessing the MIME type from the extension
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_type_for_file_name(&name).to_string();
        Self { name, mime_type, bytes }
    }

    /// Displayable representation of the contents. Not interpreted.
    pub fn data_url(&self) -> String {
        encode_data_url(&self.mime_type, &self.bytes)
    }
}

/// Where a file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSource {
    /// File picker; the `image/*` accept hint is not enforced
    Picker,
    /// Drag and drop; only `image/*` is taken
    Drop,
}

impl UploadSource {
    pub fn accepts(&self, mime_type: &str) -> bool {
        match self {
            UploadSource::Picker => true,
            UploadSource::Drop => mime_type.starts_with("image/"),
        }
    }
}

/// Index of the file the widget takes from a selection, if any.
///
/// Only the first file counts. A dropped non-image is ignored silently and
/// an empty selection is a no-op.
pub fn first_acceptable<'a, I>(source: UploadSource, mime_types: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let first = mime_types.into_iter().next()?;
    source.accepts(first).then_some(0)
}

pub fn mime_type_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        _ => DEFAULT_MIME,
    }
}

pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() { DEFAULT_MIME } else { mime_type };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Splits a base64 data URL back into its MIME type and bytes
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>)> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUrl("missing data: prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidDataUrl("missing comma".to_string()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::InvalidDataUrl("not base64 encoded".to_string()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::InvalidDataUrl(e.to_string()))?;
    Ok((mime_type.to_string(), bytes))
}
