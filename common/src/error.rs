//! Error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown grade: {0}. Use RSS1 through RSS5")]
    UnknownGrade(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown role: {0}. Use farmer, merchant, or admin")]
    UnknownRole(String),

    #[error("Unknown dashboard tab: {0}. Use overview, history, or analytics")]
    UnknownTab(String),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_grade() {
        let error = Error::UnknownGrade("RSS9".to_string());
        assert_eq!(format!("{}", error), "Unknown grade: RSS9. Use RSS1 through RSS5");
    }

    #[test]
    fn test_error_display_data_url() {
        let error = Error::InvalidDataUrl("missing comma".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Invalid data URL"));
        assert!(display.contains("missing comma"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownRole("guest".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownRole"));
        assert!(debug.contains("guest"));
    }
}
