//! Age and body-mass calculations.

use chrono::{Datelike, NaiveDate};

/// Age in completed years on `today`.
///
/// Someone born on 29 February turns a year older on 1 March in common
/// years.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Body mass index: weight (kg) over height (m) squared.
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}
