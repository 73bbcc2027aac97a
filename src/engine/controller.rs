use std::{
    io,
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError},
    },
    time::Duration,
};

use chrono::NaiveDate;

use super::{
    messages::ControllerEvent,
    state::{BackendStatus, RequestLifecycle, RequestState, Resolution},
    worker::Dispatcher,
};

use crate::{
    config::{DF, PREDICTOR},
    data::PredictionProvider,
    domain::{FieldParseError, FormField, FormState, PredictionResult, ValidationError},
    utils::{AppInstant, today_local},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// How long the success banner stays visible after a prediction lands.
    pub success_banner: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            success_banner: Duration::from_millis(PREDICTOR.banner.success_ms),
        }
    }
}

/// Owns the form, the request lifecycle and the last result.
///
/// All state changes happen on the thread that owns the controller. Requests and timers run on
/// a background runtime and only take effect when [`pump`](Self::pump) applies their events, so a
/// caller never observes a half-finished transition.
pub struct PredictionFormController {
    form: FormState,
    requests: RequestState,
    backend: BackendStatus,
    config: ControllerConfig,
    dispatcher: Dispatcher,
    events: Receiver<ControllerEvent>,
}

impl PredictionFormController {
    pub fn new(
        provider: Arc<dyn PredictionProvider>,
        config: ControllerConfig,
    ) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            form: FormState::default(),
            requests: RequestState::default(),
            backend: BackendStatus::default(),
            config,
            dispatcher: Dispatcher::new(provider, tx)?,
            events: rx,
        })
    }

    /// Start from previously saved field values instead of the defaults.
    pub fn with_form(mut self, form: FormState) -> Self {
        self.form = form;
        self
    }

    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.dispatcher.set_repaint_hook(Arc::new(hook));
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn lifecycle(&self) -> RequestLifecycle {
        self.requests.lifecycle()
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    pub fn show_success(&self) -> bool {
        self.requests.show_success()
    }

    pub fn error(&self) -> Option<&str> {
        self.requests.error()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.requests.result()
    }

    pub fn backend_status(&self) -> &BackendStatus {
        &self.backend
    }

    /// Store raw input for `field`. Leaves error and result alone.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FieldParseError> {
        let outcome = self.form.set_field(field, raw);
        if DF.log_form_edits {
            match &outcome {
                Ok(()) => log::info!("{} set to {:?}", field, raw),
                Err(e) => log::info!("Rejected input: {}", e),
            }
        }
        outcome
    }

    pub fn apply_preset(&mut self, year: i32) {
        self.apply_preset_on(year, today_local());
    }

    pub fn apply_preset_on(&mut self, year: i32, today: NaiveDate) {
        self.form.apply_preset_on(year, today);
        if DF.log_form_edits {
            log::info!("Preset {} applied ({})", year, today);
        }
    }

    /// Step the inflation rate by `steps` grid increments. Returns the new rate.
    pub fn nudge_inflation(&mut self, steps: i32) -> f64 {
        let rate = self.form.nudge_inflation(steps);
        if DF.log_form_edits {
            log::info!("Inflation nudged to {}", rate);
        }
        rate
    }

    /// Check the form; a failure becomes the current error message.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.form.check().inspect_err(|e| self.requests.reject(e))
    }

    /// Validate, then send one prediction request for the current form.
    /// Returns the request's sequence number.
    pub fn submit(&mut self) -> Result<u64, ValidationError> {
        self.validate()?;
        let seq = self.requests.begin();
        let request = self.form.to_request();
        if DF.log_requests {
            log::info!("Request #{} sent: {:?}", seq, request);
        }
        self.dispatcher.spawn_prediction(seq, request);
        Ok(seq)
    }

    /// Ask the server whether it is up.
    /// The answer lands in [`backend_status`](Self::backend_status).
    pub fn check_health(&mut self) {
        self.backend = BackendStatus::Checking;
        self.dispatcher.spawn_health_check();
    }

    /// Apply everything that has finished since the last call. Never blocks.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait up to `timeout` for at least one event, then drain the rest.
    pub fn pump_blocking(&mut self, timeout: Duration) -> usize {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                1 + self.pump()
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => 0,
        }
    }

    /// Block until the latest request resolves. `false` if `timeout` ran out first.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = AppInstant::now() + timeout;
        while self.is_loading() {
            let remaining = deadline.saturating_duration_since(AppInstant::now());
            if remaining.is_zero() {
                return false;
            }
            self.pump_blocking(remaining);
        }
        true
    }

    fn apply(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::Resolved {
                seq,
                outcome,
                elapsed_ms,
            } => {
                if let Err(e) = &outcome {
                    log::warn!("Request #{} failed after {}ms: {}", seq, elapsed_ms, e);
                }
                match self.requests.resolve(seq, outcome) {
                    Resolution::Succeeded => {
                        self.dispatcher
                            .spawn_success_expiry(seq, self.config.success_banner);
                    }
                    Resolution::Failed => {}
                    Resolution::Stale => {
                        if DF.log_stale_events {
                            log::info!(
                                "Dropped response for request #{} (latest is #{})",
                                seq,
                                self.requests.latest_seq()
                            );
                        }
                    }
                }
            }
            ControllerEvent::SuccessExpired { seq } => {
                if !self.requests.expire_success(seq) && DF.log_stale_events {
                    log::info!("Ignored banner timer from request #{}", seq);
                }
            }
            ControllerEvent::Health(outcome) => {
                self.backend = match outcome {
                    Ok(status) => BackendStatus::Online(status),
                    Err(e) => BackendStatus::Offline(e.to_string()),
                };
                if DF.log_health {
                    log::info!("Backend status: {:?}", self.backend);
                }
            }
        }
    }
}
