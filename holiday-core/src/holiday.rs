use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rating;

/// A travel listing managed by the service.
///
/// `average_rating` is derived from `rating` but only refreshed when a
/// holiday is read individually or its ratings change, so a listing can
/// carry a stale value after an update.
///
/// Any field missing from a stored record loads as its default, so one
/// sparse record never invalidates the rest of a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Holiday {
    pub id: i64,
    pub title: String,
    pub country: String,
    pub city: String,
    pub duration: String,
    pub season: String,
    pub description: String,
    pub price: f64,
    pub photos: Vec<String>,
    pub rating: Vec<i32>,
    pub average_rating: f64,
}

/// Caller supplied fields for creating or updating a holiday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayDraft {
    pub title: String,
    pub country: String,
    pub city: String,
    pub duration: String,
    pub season: String,
    pub description: String,
    pub price: f64,
    pub photos: Vec<String>,
}

impl Holiday {
    /// Build a fresh, unrated holiday from a draft.
    pub fn new(id: i64, draft: HolidayDraft) -> Self {
        let mut holiday = Self {
            id,
            ..Default::default()
        };
        holiday.apply(draft);
        holiday
    }

    /// Overwrite the editable fields. Ratings and id are left alone.
    pub fn apply(&mut self, draft: HolidayDraft) {
        self.title = draft.title;
        self.country = draft.country;
        self.city = draft.city;
        self.duration = draft.duration;
        self.season = draft.season;
        self.description = draft.description;
        self.price = draft.price;
        self.photos = draft.photos;
    }

    pub fn refresh_average(&mut self) {
        self.average_rating = rating::average(&self.rating);
    }

    /// Append a rating and recompute the average.
    /// Range checking is the caller's job.
    pub fn add_rating(&mut self, value: i32) {
        self.rating.push(value);
        self.refresh_average();
    }

    pub fn reset_rating(&mut self) {
        self.rating.clear();
        self.average_rating = 0.0;
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Holiday{{id={}, title='{}', country='{}', city='{}', duration='{}', season='{}', description='{}', price={}, photos={:?}, rating={:?}}}",
            self.id,
            self.title,
            self.country,
            self.city,
            self.duration,
            self.season,
            self.description,
            self.price,
            self.photos,
            self.rating,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beach_trip() -> HolidayDraft {
        HolidayDraft {
            title: "Beach Trip".to_string(),
            country: "Spain".to_string(),
            price: 499.99,
            photos: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_new_holiday_is_unrated() {
        let holiday = Holiday::new(1, beach_trip());
        assert_eq!(holiday.id, 1);
        assert_eq!(holiday.title, "Beach Trip");
        assert!(holiday.rating.is_empty());
        assert_eq!(holiday.average_rating, 0.0);
    }

    #[test]
    fn test_apply_keeps_ratings() {
        let mut holiday = Holiday::new(7, beach_trip());
        holiday.add_rating(5);

        holiday.apply(HolidayDraft {
            title: "Ski Week".to_string(),
            price: 899.0,
            ..Default::default()
        });

        assert_eq!(holiday.id, 7);
        assert_eq!(holiday.title, "Ski Week");
        assert!(holiday.photos.is_empty());
        assert_eq!(holiday.rating, vec![5]);
        assert_eq!(holiday.average_rating, 5.0);
    }

    #[test]
    fn test_rating_lifecycle() {
        let mut holiday = Holiday::new(1, beach_trip());

        holiday.add_rating(4);
        assert_eq!(holiday.average_rating, 4.0);

        holiday.add_rating(2);
        assert_eq!(holiday.rating, vec![4, 2]);
        assert_eq!(holiday.average_rating, 3.0);

        holiday.reset_rating();
        assert!(holiday.rating.is_empty());
        assert_eq!(holiday.average_rating, 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let mut holiday = Holiday::new(3, beach_trip());
        holiday.add_rating(4);

        let value = serde_json::to_value(&holiday).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["country"], "Spain");
        assert_eq!(value["photos"][1], "b.jpg");
        assert_eq!(value["rating"][0], 4);
        assert_eq!(value["average_rating"], 4.0);
        assert!(value.get("averageRating").is_none());
    }

    #[test]
    fn test_missing_rating_fields_default_on_load() {
        let json = r#"{
            "id": 2,
            "title": "City Break",
            "country": "France",
            "city": "Paris",
            "duration": "3 days",
            "season": "Spring",
            "description": "Museums",
            "price": 350.0
        }"#;

        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert!(holiday.photos.is_empty());
        assert!(holiday.rating.is_empty());
        assert_eq!(holiday.average_rating, 0.0);
    }

    #[test]
    fn test_missing_text_fields_default_on_load() {
        let json = r#"{"id": 4, "country": "Greece", "price": 120.5, "photos": ["x.jpg"]}"#;

        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.id, 4);
        assert_eq!(holiday.title, "");
        assert_eq!(holiday.city, "");
        assert_eq!(holiday.country, "Greece");
        assert_eq!(holiday.price, 120.5);
        assert_eq!(holiday.photos, vec!["x.jpg"]);
    }

    #[test]
    fn test_display_summary() {
        let holiday = Holiday::new(1, beach_trip());
        let text = holiday.to_string();
        assert!(text.starts_with("Holiday{id=1, title='Beach Trip'"));
        assert!(text.contains("photos=[\"a.jpg\", \"b.jpg\"]"));
    }
}
