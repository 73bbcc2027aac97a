use crate::domain::{PredictionResult, RequestError};

/// Work finished on the runtime, waiting to be applied by the controller's owner thread.
#[derive(Debug)]
pub(crate) enum ControllerEvent {
    /// A prediction request came back (or failed) for submit number `seq`.
    Resolved {
        seq: u64,
        outcome: Result<PredictionResult, RequestError>,
        elapsed_ms: u128,
    },
    /// The success banner scheduled by submit number `seq` has run its course.
    SuccessExpired { seq: u64 },
    Health(Result<String, RequestError>),
}
