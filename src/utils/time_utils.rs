use chrono::{Local, Month, NaiveDate};

/// Monotonic clock used for request timing.
pub type AppInstant = web_time::Instant;

/// Today's date in the user's local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// English month name for a 1-based month, if it is one.
pub fn month_name(month: i32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}

/// "June 15, 2024". Triples that are not a real calendar date come back as numerals.
pub fn format_long_date(year: i32, month: i32, day: i32) -> String {
    let is_real_date = u32::try_from(month)
        .ok()
        .zip(u32::try_from(day).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .is_some();

    match month_name(month) {
        Some(name) if is_real_date => format!("{} {}, {}", name, day, year),
        _ => format!("{:04}-{:02}-{:02}", year, month, day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(month_name(-1), None);
    }

    #[test]
    fn long_date_formatting() {
        assert_eq!(format_long_date(2024, 6, 15), "June 15, 2024");
        assert_eq!(format_long_date(2025, 1, 1), "January 1, 2025");
        assert_eq!(format_long_date(2023, 2, 31), "2023-02-31");
        assert_eq!(format_long_date(2023, 14, 3), "2023-14-03");
    }
}
