/// HTTP client limits. The controller enforces no timeout itself, so these are the only bounds.
pub struct ClientDefaults {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct EndpointConfig {
    pub base_url: &'static str,
    pub predict_path: &'static str,
    pub health_path: &'static str,
}

pub struct BannerConfig {
    /// How long the "Prediction successful" banner stays up after a response.
    pub success_ms: u64,
}

pub struct StartupConfig {
    /// Longest the window waits on the first health answer before showing the form anyway.
    pub probe_grace_ms: u64,
}

pub struct PredictorConfig {
    pub endpoint: EndpointConfig,
    pub client: ClientDefaults,
    pub banner: BannerConfig,
    pub startup: StartupConfig,
    /// Shown when a failed request carries no `error` field of its own.
    pub fallback_error: &'static str,
}

pub const PREDICTOR: PredictorConfig = PredictorConfig {
    endpoint: EndpointConfig {
        base_url: "http://localhost:5000",
        predict_path: "/api/predict",
        health_path: "/api/health",
    },
    client: ClientDefaults {
        connect_timeout_ms: 5000,
        request_timeout_ms: 30_000,
        user_agent: concat!("gold-predictor/", env!("CARGO_PKG_VERSION")),
    },
    banner: BannerConfig { success_ms: 3000 },
    startup: StartupConfig {
        probe_grace_ms: 1500,
    },
    fallback_error: "Failed to get prediction. Make sure the backend server is running.",
};
