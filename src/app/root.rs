use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, FieldInputs, PhaseView, ProbingState, RunningState, Shortcuts},
    build_controller,
    config::{DF, PREDICTOR},
    domain::FormState,
    engine::PredictionFormController,
    ui::{UI_CONFIG, render_form, render_probing, render_startup_failure, render_status_panel},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) form: FormState, // persists across sessions.
    #[serde(skip)]
    pub(crate) controller: Option<PredictionFormController>,
    #[serde(skip)]
    pub(crate) inputs: FieldInputs,
    #[serde(skip)]
    pub(crate) endpoint: String,
    #[serde(skip)]
    pub(crate) startup_error: Option<String>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            controller: None,
            inputs: FieldInputs::default(),
            endpoint: PREDICTOR.endpoint.base_url.to_string(),
            startup_error: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if DF.log_persistence {
            log::info!("Restored form: {:?}", app.form);
        }

        app.endpoint = args.endpoint;
        app.inputs = FieldInputs::from_form(&app.form);
        app.state = AppState::Probing(ProbingState::default());

        match build_controller(&app.endpoint, app.form) {
            Ok(mut controller) => {
                let ctx = cc.egui_ctx.clone();
                controller.set_repaint_hook(move || ctx.request_repaint());
                controller.check_health();
                app.controller = Some(controller);
            }
            Err(e) => {
                log::error!("Prediction client failed to start: {:#}", e);
                app.startup_error = Some(format!("{:#}", e));
            }
        }

        app
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        let typing = ctx.wants_keyboard_input();
        let loading = controller.is_loading();
        let shortcuts =
            ctx.input(|i| Shortcuts::from_keys(|key| i.key_pressed(key), typing, loading));

        if let Some(year) = shortcuts.preset {
            controller.apply_preset(year);
            self.inputs.sync_from(controller.form());
        }
        if shortcuts.submit {
            if let Err(e) = controller.submit() {
                log::debug!("Submit rejected: {}", e);
            }
        }
    }

    pub(crate) fn tick_probing_state(
        &mut self,
        ctx: &Context,
        state: &mut ProbingState,
    ) -> AppState {
        let settled = match self.controller.as_mut() {
            Some(controller) => {
                controller.pump();
                controller.backend_status().is_settled()
            }
            None => true,
        };

        let grace = Duration::from_millis(PREDICTOR.startup.probe_grace_ms);
        if settled || state.started.elapsed() >= grace {
            return AppState::Running(RunningState);
        }

        render_probing(ctx, &self.endpoint);
        ctx.request_repaint_after(Duration::from_millis(100));
        AppState::Probing(*state)
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let Some(controller) = self.controller.as_mut() else {
            render_startup_failure(ctx, self.startup_error.as_deref());
            return;
        };
        controller.pump();

        self.handle_global_shortcuts(ctx);

        if let Some(controller) = self.controller.as_mut() {
            render_status_panel(ctx, controller, &self.endpoint);
            render_form(ctx, controller, &mut self.inputs);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Probing(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if let Some(controller) = &self.controller {
            self.form = *controller.form();
        }
        if DF.log_persistence {
            log::info!("💾 SAVE [App]: form = {:?}", self.form);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent_dim;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
