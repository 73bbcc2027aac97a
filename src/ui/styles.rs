use eframe::egui::{Color32, RichText, Ui};

use crate::ui::UI_CONFIG;

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_field(&mut self, text: impl Into<String>);
    /// Small captioned tile, as used in the result card.
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    /// Full-width colored message strip.
    fn banner(&mut self, text: &str, fill: Color32, color: Color32);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors.subdued),
        );
    }

    fn label_field(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        UI_CONFIG.tile_frame().show(self, |ui| {
            ui.vertical(|ui| {
                ui.label_subdued(label);
                ui.label(RichText::new(value).strong().color(color));
            });
        });
    }

    fn banner(&mut self, text: &str, fill: Color32, color: Color32) {
        UI_CONFIG.banner_frame(fill, color).show(self, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(color));
        });
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text)
            .size(16.0)
            .strong()
            .color(Color32::BLACK)
    }
}
