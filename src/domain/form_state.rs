use {
    chrono::{Datelike, NaiveDate},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

use crate::{
    config::FORM,
    domain::{FieldParseError, PredictionRequest, ValidationError},
};

/// The user-editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FormField {
    Year,
    Month,
    Day,
    #[strum(to_string = "Inflation rate")]
    InflationRate,
}

/// Current contents of the form. Always holds a value for every field; ranges are only
/// checked by [`FormState::check`], never on assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub inflation_rate_pct: f64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            year: FORM.defaults.year,
            month: FORM.defaults.month,
            day: FORM.defaults.day,
            inflation_rate_pct: FORM.defaults.inflation_rate_pct,
        }
    }
}

impl FormState {
    /// Parse `raw` for `field` and store it. On failure the form is left untouched.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FieldParseError> {
        match field {
            FormField::Year => self.year = parse_whole(field, raw)?,
            FormField::Month => self.month = parse_whole(field, raw)?,
            FormField::Day => self.day = parse_whole(field, raw)?,
            FormField::InflationRate => self.inflation_rate_pct = parse_rate(raw)?,
        }
        Ok(())
    }

    /// Current text of `field`, as the input boxes should show it.
    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::Year => self.year.to_string(),
            FormField::Month => self.month.to_string(),
            FormField::Day => self.day.to_string(),
            FormField::InflationRate => self.inflation_rate_pct.to_string(),
        }
    }

    /// Jump to `year`, keeping today's month and day.
    pub fn apply_preset_on(&mut self, year: i32, today: NaiveDate) {
        self.year = year;
        self.month = today.month() as i32;
        self.day = today.day() as i32;
    }

    /// Move the inflation rate `steps` increments along the input's step grid, snapping
    /// off-grid values onto it. Returns the new rate.
    pub fn nudge_inflation(&mut self, steps: i32) -> f64 {
        let scale = FORM.hints.inflation_step_pct.recip();
        let target = self.inflation_rate_pct * scale + f64::from(steps);
        // `+ 0.0` turns a snapped -0.0 into 0.0
        self.inflation_rate_pct = target.round() / scale + 0.0;
        self.inflation_rate_pct
    }

    /// Range checks in fixed order; only the first failure is reported.
    /// Days are not checked against the month's length.
    pub fn check(&self) -> Result<(), ValidationError> {
        let hints = &FORM.hints;
        if self.year < hints.min_year {
            return Err(ValidationError::YearTooEarly {
                min_year: hints.min_year,
            });
        }
        if !(1..=12).contains(&self.month) {
            return Err(ValidationError::MonthOutOfRange);
        }
        if !(1..=hints.max_day).contains(&self.day) {
            return Err(ValidationError::DayOutOfRange {
                max_day: hints.max_day,
            });
        }
        Ok(())
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            year: self.year,
            month: self.month,
            day: self.day,
            inflation_rate_pct: self.inflation_rate_pct,
        }
    }
}

fn parse_whole(field: FormField, raw: &str) -> Result<i32, FieldParseError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| FieldParseError::new(field, raw))
}

// `f64::from_str` accepts "NaN" and "inf"; neither is a usable rate.
fn parse_rate(raw: &str) -> Result<f64, FieldParseError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldParseError::new(FormField::InflationRate, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn form(year: i32, month: i32, day: i32) -> FormState {
        FormState {
            year,
            month,
            day,
            inflation_rate_pct: 2.5,
        }
    }

    #[test]
    fn defaults_are_the_demo_date() {
        let f = FormState::default();
        assert_eq!((f.year, f.month, f.day), (2024, 6, 15));
        assert_eq!(f.inflation_rate_pct, 2.5);
        assert!(f.check().is_ok());
    }

    #[test]
    fn set_field_parses_without_clamping() {
        let mut f = FormState::default();
        f.set_field(FormField::Year, " 1850 ").unwrap();
        f.set_field(FormField::Month, "14").unwrap();
        f.set_field(FormField::Day, "-3").unwrap();
        f.set_field(FormField::InflationRate, "75.25").unwrap();
        assert_eq!(f, FormState {
            year: 1850,
            month: 14,
            day: -3,
            inflation_rate_pct: 75.25,
        });
    }

    #[test]
    fn unparseable_input_leaves_form_unchanged() {
        let mut f = FormState::default();
        for field in FormField::iter() {
            for raw in ["", "abc", "12x"] {
                let err = f.set_field(field, raw).unwrap_err();
                assert_eq!(err.field, field);
                assert_eq!(err.raw, raw);
            }
        }
        assert!(f.set_field(FormField::Year, "2024.5").is_err());
        assert!(f.set_field(FormField::InflationRate, "NaN").is_err());
        assert!(f.set_field(FormField::InflationRate, "inf").is_err());
        assert_eq!(f, FormState::default());
    }

    #[test]
    fn year_checked_first() {
        for year in [i32::MIN, 0, 1000, 1899] {
            // every other field broken too: only the year error surfaces
            let err = form(year, 0, 0).check().unwrap_err();
            assert_eq!(err.to_string(), "Year must be after 1900");
        }
        assert!(form(1900, 6, 15).check().is_ok());
        assert!(form(250_000, 6, 15).check().is_ok());
    }

    #[test]
    fn month_checked_before_day() {
        for month in [i32::MIN, -1, 0, 13, 100] {
            let err = form(2024, month, 99).check().unwrap_err();
            assert_eq!(err, ValidationError::MonthOutOfRange);
        }
    }

    #[test]
    fn day_range_ignores_month_length() {
        for day in [-5, 0, 32] {
            let err = form(2024, 6, day).check().unwrap_err();
            assert_eq!(err.to_string(), "Day must be between 1 and 31");
        }
        assert!(form(2023, 2, 31).check().is_ok());
        assert!(form(2024, 12, 1).check().is_ok());
    }

    #[test]
    fn check_is_idempotent() {
        let f = form(2024, 13, 40);
        let first = f.check();
        for _ in 0..5 {
            assert_eq!(f.check(), first);
        }
    }

    #[test]
    fn preset_takes_month_and_day_from_today() {
        let mut f = form(1999, 1, 1);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        f.apply_preset_on(2023, today);
        assert_eq!((f.year, f.month, f.day), (2023, 10, 16));
        assert_eq!(f.inflation_rate_pct, 2.5);
    }

    fn with_rate(rate: f64) -> FormState {
        FormState {
            inflation_rate_pct: rate,
            ..FormState::default()
        }
    }

    #[test]
    fn nudge_up_then_down_returns_to_start() {
        let mut f = with_rate(2.5);
        assert_eq!(f.nudge_inflation(1), 2.6);
        assert_eq!(f.field_text(FormField::InflationRate), "2.6");
        assert_eq!(f.nudge_inflation(-1), 2.5);
        assert_eq!(f.nudge_inflation(10), 3.5);
    }

    #[test]
    fn nudge_snaps_off_grid_values() {
        assert_eq!(with_rate(2.53).nudge_inflation(1), 2.6);
        assert_eq!(with_rate(0.04).nudge_inflation(-1), -0.1);
        assert_eq!(with_rate(-10.0).nudge_inflation(-1), -10.1);
    }

    #[test]
    fn nudge_to_zero_is_positive_zero() {
        let mut f = with_rate(-0.14);
        let rate = f.nudge_inflation(1);
        assert_eq!(rate, 0.0);
        assert!(rate.is_sign_positive());
        assert_eq!(f.field_text(FormField::InflationRate), "0");

        let rate = with_rate(0.1).nudge_inflation(-1);
        assert!(rate == 0.0 && rate.is_sign_positive());
    }

    #[test]
    fn request_carries_current_fields() {
        let mut f = FormState::default();
        f.set_field(FormField::InflationRate, "-1.5").unwrap();
        let req = f.to_request();
        assert_eq!((req.year, req.month, req.day), (2024, 6, 15));
        assert_eq!(req.inflation_rate_pct, -1.5);
    }

    #[test]
    fn persisted_form_fills_missing_fields_with_defaults() {
        let f: FormState = serde_json::from_str(r#"{"year": 2030}"#).unwrap();
        assert_eq!(f.year, 2030);
        assert_eq!(f.month, FORM.defaults.month);
    }
}
