/// Initial values shown before the user touches anything.
pub struct FormDefaults {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub inflation_rate_pct: f64,
}

/// Range hints for the inputs. Only `min_year` is enforced locally; the rest are advisory.
pub struct InputHints {
    pub min_year: i32,
    pub max_day: i32,
    pub inflation_min_pct: f64,
    pub inflation_max_pct: f64,
    pub inflation_step_pct: f64,
}

pub struct FormConfig {
    pub defaults: FormDefaults,
    pub hints: InputHints,
    /// Quick-pick years, in display order.
    pub preset_years: &'static [i32],
}

pub const FORM: FormConfig = FormConfig {
    defaults: FormDefaults {
        year: 2024,
        month: 6,
        day: 15,
        inflation_rate_pct: 2.5,
    },
    hints: InputHints {
        min_year: 1900,
        max_day: 31,
        inflation_min_pct: -10.0,
        inflation_max_pct: 50.0,
        inflation_step_pct: 0.1,
    },
    preset_years: &[2025, 2024, 2023],
};
