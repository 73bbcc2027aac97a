use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::{AppState, RunningState}};

impl PhaseView for RunningState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_running_state(ctx);

        AppState::Running(RunningState)
    }
}
