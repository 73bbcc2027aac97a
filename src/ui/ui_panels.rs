use eframe::egui::{Align, Button, CentralPanel, Context, Layout, RichText, TopBottomPanel, Ui};

use crate::{
    domain::PredictionResult,
    engine::{BackendStatus, PredictionFormController, RequestLifecycle},
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::UiStyleExt,
        ui_text::{ICON_ONLINE, ICON_WARNING},
    },
};

pub(crate) fn render_status_panel(
    ctx: &Context,
    controller: &mut PredictionFormController,
    endpoint: &str,
) {
    TopBottomPanel::bottom("status_panel")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let colors = &UI_CONFIG.colors;
                let (text, color) = match controller.backend_status() {
                    BackendStatus::Unknown => (UI_TEXT.status_unknown.clone(), colors.subdued),
                    BackendStatus::Checking => (UI_TEXT.status_checking.clone(), colors.info),
                    BackendStatus::Online(status) => (status.clone(), colors.success_text),
                    BackendStatus::Offline(_) => {
                        (UI_TEXT.status_offline.clone(), colors.error_text)
                    }
                };
                ui.label(RichText::new(ICON_ONLINE).color(color));
                ui.label_subdued(format!("{}:", UI_TEXT.status_server));
                let response = ui.label(RichText::new(text).small().color(color));
                if let BackendStatus::Offline(reason) = controller.backend_status() {
                    response.on_hover_text(reason.as_str());
                }
                ui.label_subdued(endpoint);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let checking = *controller.backend_status() == BackendStatus::Checking;
                    let recheck = Button::new(RichText::new(&UI_TEXT.status_recheck).small());
                    if ui.add_enabled(!checking, recheck).clicked() {
                        controller.check_health();
                    }
                    ui.label_subdued(lifecycle_text(controller.lifecycle()));
                });
            });
        });
}

fn lifecycle_text(lifecycle: RequestLifecycle) -> &'static str {
    match lifecycle {
        RequestLifecycle::Idle => "Ready",
        RequestLifecycle::Loading => "Predicting",
        RequestLifecycle::Succeeded => "Last prediction succeeded",
        RequestLifecycle::Failed => "Last prediction failed",
    }
}

pub(crate) fn render_result_card(ui: &mut Ui, result: &PredictionResult) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label_subdued(UI_TEXT.result_heading.as_str());
            ui.label(
                RichText::new(result.formatted_price())
                    .size(44.0)
                    .strong()
                    .color(UI_CONFIG.colors.accent),
            );
            ui.label_subdued(result.unit.as_str());
            ui.add_space(10.0);
            ui.label_subdued(UI_TEXT.result_for_date.as_str());
            ui.label(RichText::new(result.formatted_date()).size(18.0).strong());
        });
        ui.add_space(12.0);
        ui.columns(3, |cols| {
            cols[0].metric(&UI_TEXT.tile_currency, &result.currency, UI_CONFIG.colors.label);
            cols[1].metric(
                &UI_TEXT.tile_inflation,
                &result.formatted_inflation(),
                UI_CONFIG.colors.label,
            );
            cols[2].metric(
                &UI_TEXT.tile_status,
                &UI_TEXT.tile_status_value,
                UI_CONFIG.colors.success_text,
            );
        });
    });
}

pub(crate) fn render_startup_failure(ctx: &Context, error: Option<&str>) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new(format!("{} {}", ICON_WARNING, UI_TEXT.startup_failed))
                    .strong()
                    .color(UI_CONFIG.colors.error_text),
            );
            if let Some(error) = error {
                ui.add_space(8.0);
                ui.label_subdued(error);
            }
        });
    });
}
