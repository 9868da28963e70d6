use std::sync::Arc;
use holiday_core::repository::HolidayRepository;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HolidayRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn HolidayRepository>) -> Self {
        Self { store }
    }
}
