// app/phases/probing.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::{AppState, ProbingState}};

impl PhaseView for ProbingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_probing_state(ctx, self)
    }
}
