use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    serde::Deserialize,
    std::time::Duration,
};

use crate::{
    config::PREDICTOR,
    domain::{PredictionRequest, PredictionResult, RequestError},
};

/// Abstract interface for the remote prediction service.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// One prediction round-trip. No retries.
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, RequestError>;

    /// Liveness probe. Returns the server's status line.
    async fn health(&self) -> Result<String, RequestError>;
}

/// Talks JSON over HTTP to the prediction server.
pub struct HttpPredictionProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPredictionProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(PREDICTOR.client.connect_timeout_ms))
            .timeout(Duration::from_millis(PREDICTOR.client.request_timeout_ms))
            .user_agent(PREDICTOR.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PredictionProvider for HttpPredictionProvider {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, RequestError> {
        let response = self
            .client
            .post(self.url(PREDICTOR.endpoint.predict_path))
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        decode_prediction(status, &body)
    }

    async fn health(&self) -> Result<String, RequestError> {
        let response = self
            .client
            .get(self.url(PREDICTOR.endpoint.health_path))
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        decode_health(status, &body)
    }
}

#[derive(Deserialize)]
struct HealthBody {
    status: String,
}

/// Turn a status code and raw body into a result, pulling the server's `error` message out of
/// failed responses where there is one.
pub(crate) fn decode_prediction(
    status: u16,
    body: &[u8],
) -> Result<PredictionResult, RequestError> {
    decode_with(status, body, |body| serde_json::from_slice::<PredictionResult>(body))
}

pub(crate) fn decode_health(status: u16, body: &[u8]) -> Result<String, RequestError> {
    decode_with(status, body, |body| {
        serde_json::from_slice::<HealthBody>(body).map(|h| h.status)
    })
}

fn decode_with<T>(
    status: u16,
    body: &[u8],
    parse: impl FnOnce(&[u8]) -> serde_json::Result<T>,
) -> Result<T, RequestError> {
    if (200..300).contains(&status) {
        return parse(body).map_err(|e| match backend_message(body) {
            Some(message) => RequestError::Backend { status, message },
            None => RequestError::Decode(e.to_string()),
        });
    }

    Err(match backend_message(body) {
        Some(message) => RequestError::Backend { status, message },
        None => RequestError::Status { status },
    })
}

// Empty or non-string `error` values count as absent.
fn backend_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{"predicted_price": 1950.25, "year": 2024, "month": 6, "day": 15,
        "unit": "USD/oz", "currency": "USD", "inflation_rate": 2.5}"#;

    #[test]
    fn success_body_decodes() {
        let result = decode_prediction(200, OK_BODY.as_bytes()).unwrap();
        assert_eq!(result.predicted_price, 1950.25);
        assert_eq!(result.unit, "USD/oz");
    }

    #[test]
    fn error_field_is_taken_verbatim() {
        let err = decode_prediction(500, br#"{"error": "model unavailable"}"#).unwrap_err();
        assert_eq!(
            err,
            RequestError::Backend {
                status: 500,
                message: "model unavailable".to_string()
            }
        );
        assert_eq!(err.user_message(), "model unavailable");
    }

    #[test]
    fn non_2xx_without_error_field_is_a_status_error() {
        let bodies: [&[u8]; 4] = [
            b"",
            b"<html>502</html>",
            br#"{"error": ""}"#,
            br#"{"error": 42}"#,
        ];
        for body in bodies {
            let err = decode_prediction(502, body).unwrap_err();
            assert_eq!(err, RequestError::Status { status: 502 });
        }
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_prediction(200, br#"{"predicted_price": "lots"}"#).unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[test]
    fn success_status_with_error_body_uses_the_message() {
        let err = decode_prediction(200, br#"{"error": "Invalid date"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Invalid date");
    }

    #[test]
    fn health_body_decodes() {
        let status = decode_health(200, br#"{"status": "Model server is running!"}"#).unwrap();
        assert_eq!(status, "Model server is running!");
        assert!(decode_health(503, b"").is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let provider = HttpPredictionProvider::new("http://localhost:5000/").unwrap();
        assert_eq!(provider.base_url(), "http://localhost:5000");
        assert_eq!(
            provider.url(PREDICTOR.endpoint.predict_path),
            "http://localhost:5000/api/predict"
        );
    }
}
