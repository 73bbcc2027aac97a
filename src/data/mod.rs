mod provider;

pub use provider::{HttpPredictionProvider, PredictionProvider};
