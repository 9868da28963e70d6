pub mod holiday;
pub mod rating;
pub mod repository;

pub use holiday::{Holiday, HolidayDraft};
pub use repository::HolidayRepository;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CoreError {
    #[error("Holiday not found: {0}")]
    NotFound(i64),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("No holiday id left after {0}")]
    IdExhausted(i64),
}

pub type CoreResult<T> = Result<T, CoreError>;
