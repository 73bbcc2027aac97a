// Domain types and value objects
mod errors;
mod form_state;
mod prediction;

// Re-export commonly used types to the world
pub use errors::{FieldParseError, RequestError, ValidationError};
pub use form_state::{FormField, FormState};
pub use prediction::{PredictionRequest, PredictionResult};
