pub mod footer;
pub mod grade_badge;
pub mod header;
pub mod progress_bar;
pub mod result_card;
pub mod upload_area;
