use std::sync::LazyLock;

use crate::config::FORM;

pub const ICON_WARNING: &str = "⚠";
pub const ICON_SUCCESS: &str = "✔";
pub const ICON_SPARKLE: &str = "✨";
pub const ICON_ONLINE: &str = "●";

pub struct UiText {
    // --- Header ---
    pub title: String,
    pub subtitle: String,
    pub tagline: String,

    // --- Form ---
    pub label_year: String,
    pub label_month: String,
    pub label_day: String,
    pub label_inflation: String,
    pub hint_year: String,
    pub hint_day: String,
    pub hint_inflation: String,
    pub hint_not_a_number: String,
    pub hint_presets: String,
    pub button_predict: String,
    pub button_predicting: String,

    // --- Banners ---
    pub banner_success: String,

    // --- Result card ---
    pub result_heading: String,
    pub result_for_date: String,
    pub tile_currency: String,
    pub tile_inflation: String,
    pub tile_status: String,
    pub tile_status_value: String,

    // --- Footer ---
    pub features: [(String, String); 3],

    // --- Probing / status ---
    pub probe_title: String,
    pub probe_waiting: String,
    pub status_server: String,
    pub status_unknown: String,
    pub status_checking: String,
    pub status_offline: String,
    pub status_recheck: String,
    pub startup_failed: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    title: "Gold Price".to_string(),
    subtitle: "Predictor".to_string(),
    tagline: "Predict gold prices for any year with advanced AI".to_string(),

    label_year: "YEAR".to_string(),
    label_month: "MONTH".to_string(),
    label_day: "DAY".to_string(),
    label_inflation: "INFLATION %".to_string(),
    hint_year: "Any year (limitless)".to_string(),
    hint_day: "1 - 31".to_string(),
    hint_inflation: format!(
        "{}% to {}%",
        FORM.hints.inflation_min_pct, FORM.hints.inflation_max_pct
    ),
    hint_not_a_number: "Not a number".to_string(),
    hint_presets: "F1-F3 pick a preset, Enter predicts, Up/Down nudge inflation".to_string(),
    button_predict: format!("{} Predict Price", ICON_SPARKLE),
    button_predicting: "Predicting...".to_string(),

    banner_success: format!("{} Prediction successful!", ICON_SUCCESS),

    result_heading: "PREDICTED GOLD PRICE".to_string(),
    result_for_date: "For the date:".to_string(),
    tile_currency: "Currency".to_string(),
    tile_inflation: "Inflation Rate".to_string(),
    tile_status: "Status".to_string(),
    tile_status_value: format!("{} Predicted", ICON_SUCCESS),

    features: [
        ("AI Powered".to_string(), "XGBoost ML model".to_string()),
        ("Historical Data".to_string(), "From Kaggle dataset".to_string()),
        ("Real-time".to_string(), "Instant predictions".to_string()),
    ],

    probe_title: "Connecting".to_string(),
    probe_waiting: "Checking prediction server at".to_string(),
    status_server: "Server".to_string(),
    status_unknown: "not checked".to_string(),
    status_checking: "checking...".to_string(),
    status_offline: "offline".to_string(),
    status_recheck: "Re-check".to_string(),
    startup_failed: "The prediction client could not start".to_string(),
});
