use crate::domain::{PredictionResult, RequestError, ValidationError};

/// Where the most recent prediction attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Last known answer from the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Checking,
    Online(String),
    Offline(String),
}

impl BackendStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Online(_) | Self::Offline(_))
    }
}

/// What a resolved event did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// A newer submit owns the state; the event was dropped.
    Stale,
    Succeeded,
    Failed,
}

/// Request-side state of the form, mutated only through the transitions below.
///
/// Every submit gets a fresh sequence number. Responses and banner expiries tagged with an
/// older number are ignored, so the newest submit alone decides what is shown.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestState {
    lifecycle: RequestLifecycle,
    error: Option<String>,
    result: Option<PredictionResult>,
    show_success: bool,
    latest_seq: u64,
}

impl RequestState {
    pub(crate) fn lifecycle(&self) -> RequestLifecycle {
        self.lifecycle
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.lifecycle == RequestLifecycle::Loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub(crate) fn show_success(&self) -> bool {
        self.show_success
    }

    pub(crate) fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Idle/terminal -> Loading. Returns the sequence number of the new request.
    pub(crate) fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        self.lifecycle = RequestLifecycle::Loading;
        self.error = None;
        self.show_success = false;
        self.result = None;
        self.latest_seq
    }

    /// Local validation failed. An in-flight request keeps the state in Loading.
    pub(crate) fn reject(&mut self, err: &ValidationError) {
        self.error = Some(err.to_string());
        if !self.is_loading() {
            self.lifecycle = RequestLifecycle::Failed;
        }
    }

    /// Loading -> Succeeded | Failed, for the latest request only.
    pub(crate) fn resolve(
        &mut self,
        seq: u64,
        outcome: Result<PredictionResult, RequestError>,
    ) -> Resolution {
        if seq != self.latest_seq {
            return Resolution::Stale;
        }
        let resolution = match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.show_success = true;
                Resolution::Succeeded
            }
            Err(err) => {
                self.error = Some(err.user_message().to_owned());
                self.result = None;
                Resolution::Failed
            }
        };
        self.lifecycle = match resolution {
            Resolution::Succeeded => RequestLifecycle::Succeeded,
            _ => RequestLifecycle::Failed,
        };
        resolution
    }

    /// Hide the success banner if it still belongs to request `seq`.
    pub(crate) fn expire_success(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.show_success = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PREDICTOR;

    fn payload(price: f64) -> PredictionResult {
        PredictionResult {
            predicted_price: price,
            year: 2024,
            month: 6,
            day: 15,
            unit: "USD/oz".to_string(),
            currency: "USD".to_string(),
            inflation_rate_pct: 2.5,
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let s = RequestState::default();
        assert_eq!(s.lifecycle(), RequestLifecycle::Idle);
        assert!(!s.is_loading());
        assert!(s.error().is_none() && s.result().is_none() && !s.show_success());
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut s = RequestState::default();
        let seq = s.begin();
        s.resolve(seq, Ok(payload(1.0)));
        s.reject(&ValidationError::MonthOutOfRange);
        assert!(s.result().is_some() && s.error().is_some() && s.show_success());

        let next = s.begin();
        assert_eq!(next, seq + 1);
        assert!(s.is_loading());
        assert!(s.error().is_none() && s.result().is_none() && !s.show_success());
    }

    #[test]
    fn success_then_failure() {
        let mut s = RequestState::default();
        let seq = s.begin();
        assert_eq!(s.resolve(seq, Ok(payload(1950.25))), Resolution::Succeeded);
        assert_eq!(s.lifecycle(), RequestLifecycle::Succeeded);
        assert_eq!(s.result(), Some(&payload(1950.25)));

        let seq = s.begin();
        let err = RequestError::Transport("refused".to_string());
        assert_eq!(s.resolve(seq, Err(err)), Resolution::Failed);
        assert_eq!(s.lifecycle(), RequestLifecycle::Failed);
        assert_eq!(s.error(), Some(PREDICTOR.fallback_error));
        assert!(s.result().is_none());
        assert!(!s.is_loading());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut s = RequestState::default();
        let first = s.begin();
        let second = s.begin();
        assert_eq!(s.resolve(second, Ok(payload(2.0))), Resolution::Succeeded);
        assert_eq!(s.resolve(first, Ok(payload(1.0))), Resolution::Stale);
        assert_eq!(s.result().map(|r| r.predicted_price), Some(2.0));
    }

    #[test]
    fn stale_response_does_not_end_loading() {
        let mut s = RequestState::default();
        let first = s.begin();
        let _second = s.begin();
        let err = RequestError::Status { status: 500 };
        assert_eq!(s.resolve(first, Err(err)), Resolution::Stale);
        assert!(s.is_loading());
        assert!(s.error().is_none());
    }

    #[test]
    fn stale_banner_timer_does_not_hide_newer_success() {
        let mut s = RequestState::default();
        let first = s.begin();
        s.resolve(first, Ok(payload(1.0)));
        let second = s.begin();
        s.resolve(second, Ok(payload(2.0)));

        assert!(!s.expire_success(first));
        assert!(s.show_success());
        assert!(s.expire_success(second));
        assert!(!s.show_success());
        // the result itself outlives the banner
        assert!(s.result().is_some());
    }

    #[test]
    fn rejection_while_loading_keeps_loading() {
        let mut s = RequestState::default();
        s.begin();
        s.reject(&ValidationError::MonthOutOfRange);
        assert!(s.is_loading());
        assert_eq!(s.error(), Some("Month must be between 1 and 12"));
    }

    #[test]
    fn rejection_when_idle_fails() {
        let mut s = RequestState::default();
        s.reject(&ValidationError::YearTooEarly { min_year: 1900 });
        assert_eq!(s.lifecycle(), RequestLifecycle::Failed);
        assert_eq!(s.latest_seq(), 0);
    }
}
