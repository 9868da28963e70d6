use async_trait::async_trait;
use holiday_core::repository::HolidayRepository;
use holiday_core::{rating, CoreError, CoreResult, Holiday, HolidayDraft};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Holiday store kept in memory and mirrored to a single JSON file.
///
/// Every mutation rewrites the whole snapshot while the lock is held, so
/// concurrent requests always observe one consistent collection. Write
/// failures are logged and the in-memory change is kept.
pub struct JsonHolidayStore {
    path: PathBuf,
    holidays: Mutex<Vec<Holiday>>,
}

impl JsonHolidayStore {
    /// Load the snapshot at `path`, creating an empty one if it is missing.
    /// Unreadable or corrupt snapshots yield an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let holidays = match read_snapshot(&path) {
            Ok(holidays) => {
                info!("Loaded {} holidays from {}", holidays.len(), path.display());
                holidays
            }
            Err(e) => {
                error!("Error loading holidays from {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self {
            path,
            holidays: Mutex::new(holidays),
        }
    }

    /// Rewrite the snapshot from `holidays`. Callers hold the lock.
    async fn persist(&self, holidays: &[Holiday]) {
        if let Err(e) = write_snapshot(&self.path, holidays).await {
            error!("Failed to save holidays to {}: {}", self.path.display(), e);
        }
    }
}

#[async_trait]
impl HolidayRepository for JsonHolidayStore {
    async fn all(&self) -> Vec<Holiday> {
        self.holidays.lock().await.clone()
    }

    async fn find_by_id(&self, id: i64) -> Option<Holiday> {
        let holidays = self.holidays.lock().await;
        holidays.iter().find(|h| h.id == id).cloned()
    }

    async fn refresh_average(&self, id: i64) -> Option<Holiday> {
        let mut holidays = self.holidays.lock().await;
        let holiday = holidays.iter_mut().find(|h| h.id == id)?;
        holiday.refresh_average();
        Some(holiday.clone())
    }

    async fn create(&self, draft: HolidayDraft) -> CoreResult<Holiday> {
        let mut holidays = self.holidays.lock().await;
        let max_id = holidays.iter().map(|h| h.id).max().unwrap_or(0);
        let Some(id) = max_id.checked_add(1) else {
            error!("Cannot assign an id after {}", max_id);
            return Err(CoreError::IdExhausted(max_id));
        };

        let holiday = Holiday::new(id, draft);
        holidays.push(holiday.clone());
        self.persist(&holidays).await;

        info!("Created {}", holiday);
        Ok(holiday)
    }

    async fn update(&self, id: i64, draft: HolidayDraft) -> CoreResult<Holiday> {
        let mut holidays = self.holidays.lock().await;
        let holiday = holidays
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(CoreError::NotFound(id))?;

        holiday.apply(draft);
        let updated = holiday.clone();
        self.persist(&holidays).await;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> bool {
        let mut holidays = self.holidays.lock().await;
        let Some(index) = holidays.iter().position(|h| h.id == id) else {
            return false;
        };

        holidays.remove(index);
        self.persist(&holidays).await;

        info!("Deleted holiday {}", id);
        true
    }

    async fn add_rating(&self, id: i64, value: i32) -> CoreResult<bool> {
        if !rating::is_valid_rating(value) {
            return Err(CoreError::Validation(format!(
                "rating must be between {} and {}, got {}",
                rating::MIN_RATING,
                rating::MAX_RATING,
                value
            )));
        }

        let mut holidays = self.holidays.lock().await;
        let Some(holiday) = holidays.iter_mut().find(|h| h.id == id) else {
            return Ok(false);
        };

        holiday.add_rating(value);
        self.persist(&holidays).await;

        Ok(true)
    }

    async fn reset_rating(&self, id: i64) -> bool {
        let mut holidays = self.holidays.lock().await;
        let Some(holiday) = holidays.iter_mut().find(|h| h.id == id) else {
            return false;
        };

        holiday.reset_rating();
        self.persist(&holidays).await;

        true
    }
}

fn read_snapshot(path: &Path) -> io::Result<Vec<Holiday>> {
    if !path.exists() {
        warn!("No snapshot at {}, creating an empty one", path.display());
        fs::write(path, "[]")?;
    }

    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(io::Error::from)
}

/// Write to a sibling temp file first, then rename it over the snapshot.
async fn write_snapshot(path: &Path, holidays: &[Holiday]) -> io::Result<()> {
    let json = serde_json::to_vec_pretty(holidays).map_err(io::Error::from)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await
}
