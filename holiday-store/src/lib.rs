pub mod app_config;
pub mod json_repo;

pub use json_repo::JsonHolidayStore;
