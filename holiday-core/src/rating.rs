/// Lowest rating a user can submit.
pub const MIN_RATING: i32 = 1;
/// Highest rating a user can submit.
pub const MAX_RATING: i32 = 5;

/// Arithmetic mean of the ratings, or 0.0 when there are none.
pub fn average(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    sum as f64 / ratings.len() as f64
}

pub fn is_valid_rating(value: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}
