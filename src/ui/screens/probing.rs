use eframe::egui::{CentralPanel, Context, RichText};

use crate::ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt};

pub(crate) fn render_probing(ctx: &Context, endpoint: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new(format!("{} {}", UI_TEXT.title, UI_TEXT.subtitle))
                    .size(28.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(20.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(RichText::new(&UI_TEXT.probe_title).italics());
            ui.label_subdued(format!("{} {}", UI_TEXT.probe_waiting, endpoint));
        });
    });
}
