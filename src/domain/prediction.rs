use serde::{Deserialize, Serialize};

use crate::utils::format_long_date;

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    #[serde(rename = "inflation_rate")]
    pub inflation_rate_pct: f64,
}

/// Successful answer from the prediction server. Date fields are echoed back from the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub unit: String,
    pub currency: String,
    #[serde(rename = "inflation_rate")]
    pub inflation_rate_pct: f64,
}

impl PredictionResult {
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.predicted_price)
    }

    /// e.g. "June 15, 2024"
    pub fn formatted_date(&self) -> String {
        format_long_date(self.year, self.month, self.day)
    }

    pub fn formatted_inflation(&self) -> String {
        format!("{:.2}%", self.inflation_rate_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionResult {
        PredictionResult {
            predicted_price: 1950.25,
            year: 2024,
            month: 6,
            day: 15,
            unit: "USD/oz".to_string(),
            currency: "USD".to_string(),
            inflation_rate_pct: 2.5,
        }
    }

    #[test]
    fn request_uses_wire_name_for_inflation() {
        let req = PredictionRequest {
            year: 2024,
            month: 6,
            day: 15,
            inflation_rate_pct: 2.5,
        };
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"year": 2024, "month": 6, "day": 15, "inflation_rate": 2.5})
        );
    }

    #[test]
    fn parses_server_payload() {
        let body = r#"{
            "predicted_price": 1950.25,
            "year": 2024,
            "month": 6,
            "day": 15,
            "inflation_rate": 2.5,
            "currency": "USD",
            "unit": "USD/oz"
        }"#;
        let parsed: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn display_helpers() {
        let result = sample();
        assert_eq!(result.formatted_price(), "$1950.25");
        assert_eq!(result.formatted_date(), "June 15, 2024");
        assert_eq!(result.formatted_inflation(), "2.50%");
    }
}
