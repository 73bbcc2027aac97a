use std::{
    io,
    sync::{Arc, mpsc::Sender},
    time::Duration,
};

use tokio::runtime::{Builder, Runtime};

use super::messages::ControllerEvent;

use crate::{
    config::DF,
    data::PredictionProvider,
    domain::{PredictionRequest, RequestError},
    utils::AppInstant,
};

/// Called from runtime threads after an event is queued, so an idle UI wakes up to apply it.
pub(crate) type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Runs network calls and timers off the owner thread and reports back over a channel.
/// Nothing spawned here is ever cancelled.
pub(crate) struct Dispatcher {
    runtime: Runtime,
    provider: Arc<dyn PredictionProvider>,
    tx: Sender<ControllerEvent>,
    repaint: Option<RepaintHook>,
}

#[derive(Clone)]
struct EventSender {
    tx: Sender<ControllerEvent>,
    repaint: Option<RepaintHook>,
}

impl EventSender {
    fn send(&self, event: ControllerEvent) {
        // Receiver gone means the controller was dropped; nothing left to notify.
        if self.tx.send(event).is_ok() {
            if let Some(repaint) = &self.repaint {
                repaint();
            }
        }
    }
}

impl Dispatcher {
    pub(crate) fn new(
        provider: Arc<dyn PredictionProvider>,
        tx: Sender<ControllerEvent>,
    ) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("predictor-io")
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            provider,
            tx,
            repaint: None,
        })
    }

    pub(crate) fn set_repaint_hook(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
            repaint: self.repaint.clone(),
        }
    }

    pub(crate) fn spawn_prediction(&self, seq: u64, request: PredictionRequest) {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender();
        self.runtime.spawn(async move {
            let start = AppInstant::now();
            // Inner task so a panicking provider still resolves the request.
            let call = tokio::spawn(async move { provider.predict(&request).await });
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::error!("Request #{} task failed: {}", seq, e);
                    Err(RequestError::Transport(format!("request task failed: {}", e)))
                }
            };
            let elapsed_ms = start.elapsed().as_millis();

            if DF.log_requests {
                log::info!(
                    "Request #{} finished in {}ms ({})",
                    seq,
                    elapsed_ms,
                    if outcome.is_ok() { "ok" } else { "error" }
                );
            }

            sender.send(ControllerEvent::Resolved {
                seq,
                outcome,
                elapsed_ms,
            });
        });
    }

    pub(crate) fn spawn_success_expiry(&self, seq: u64, after: Duration) {
        let sender = self.sender();
        self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            sender.send(ControllerEvent::SuccessExpired { seq });
        });
    }

    pub(crate) fn spawn_health_check(&self) {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender();
        self.runtime.spawn(async move {
            let outcome = provider.health().await;
            sender.send(ControllerEvent::Health(outcome));
        });
    }
}
