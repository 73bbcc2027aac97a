mod controller;
mod messages;
mod state;
mod worker;

pub use controller::{ControllerConfig, PredictionFormController};
pub use state::{BackendStatus, RequestLifecycle};
