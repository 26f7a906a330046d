//! Rubber Sheet Grading Common Library
//!
//! Types and session logic shared by the CLI and the Web (WASM) app

pub mod types;
pub mod error;
pub mod grading;
pub mod upload;
pub mod session;
pub mod report;
pub mod navigation;
pub mod dashboard;
pub mod contact;
pub mod content;

pub use types::{Grade, GradingResult, UploadSessionState};
pub use error::{Error, Result};
pub use grading::{
    preset_for_file_name, result_from_file_name, simulated_result, FilenamePreset,
    FILENAME_PRESETS, PROGRESS_STEP, SIMULATION_INTERVAL,
};
pub use upload::{decode_data_url, first_acceptable, UploadSource, UploadedFile};
pub use session::{SessionPhase, SimulationTicket, Submission, Tick, UploadSession};
pub use report::GradingReport;
pub use navigation::{AppState, AuthMode, LoginForm, NavLink, Page, Role, User};
pub use dashboard::{AssetRequest, DashboardStats, DashboardTab, UploadRecord};
pub use contact::{ContactDesk, ContactForm};
