use async_trait::async_trait;

use crate::{CoreResult, Holiday, HolidayDraft};

/// Repository trait for holiday data access.
///
/// Implementations own every `Holiday`; callers only ever see clones.
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Every holiday in insertion order, exactly as stored.
    async fn all(&self) -> Vec<Holiday>;

    async fn find_by_id(&self, id: i64) -> Option<Holiday>;

    /// Recompute the stored average for `id` and return the record.
    async fn refresh_average(&self, id: i64) -> Option<Holiday>;

    /// Assign the next id, store and persist the new holiday.
    /// Fails with `CoreError::IdExhausted` once the largest id is `i64::MAX`.
    async fn create(&self, draft: HolidayDraft) -> CoreResult<Holiday>;

    async fn update(&self, id: i64, draft: HolidayDraft) -> CoreResult<Holiday>;

    /// Returns whether a holiday with `id` existed.
    async fn delete(&self, id: i64) -> bool;

    /// Fails with `CoreError::Validation` for values outside 1..=5,
    /// otherwise returns whether the holiday existed.
    async fn add_rating(&self, id: i64, value: i32) -> CoreResult<bool>;

    async fn reset_rating(&self, id: i64) -> bool;
}
