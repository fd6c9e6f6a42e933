#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> u32 {
    year_from_epoch_days((now_ms() / 86_400_000.0).floor() as i64)
}

/// Civil year for a day count since 1970-01-01.
#[cfg(not(target_arch = "wasm32"))]
fn year_from_epoch_days(days: i64) -> u32 {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let year = year_of_era + era * 400;
    let year = if month_index >= 10 { year + 1 } else { year };
    year as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_day_zero_is_1970() {
        assert_eq!(year_from_epoch_days(0), 1970);
    }

    #[test]
    fn year_boundaries() {
        // 2024-12-31 and 2025-01-01
        assert_eq!(year_from_epoch_days(20_088), 2024);
        assert_eq!(year_from_epoch_days(20_089), 2025);
        // 2000-02-29
        assert_eq!(year_from_epoch_days(11_016), 2000);
    }

    #[test]
    fn now_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000.0);
        assert!(current_year() >= 2020);
    }
}
