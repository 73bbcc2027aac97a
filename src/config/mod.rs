//! Configuration module for the gold price predictor client.

// Can all be private now because we have a public re-export.
mod debug;
mod form;
mod persistence;
mod predictor;

// Re-export commonly used items
pub use debug::DF;
pub use form::{FORM, FormConfig, FormDefaults, InputHints};
pub use persistence::PERSISTENCE;
pub use predictor::{PREDICTOR, PredictorConfig};
