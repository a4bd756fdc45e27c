//! UI components

pub mod header;
pub mod home_page;
pub mod results_page;
pub mod statistics_page;
pub mod upload_page;
