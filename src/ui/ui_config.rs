use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub tile: Color32,
    pub accent: Color32,
    pub accent_dim: Color32,
    pub info: Color32,
    pub error_fill: Color32,
    pub error_text: Color32,
    pub success_fill: Color32,
    pub success_text: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub form_max_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 200, 200),
        heading: Color32::from_rgb(234, 179, 8), // gold
        subsection_heading: Color32::from_rgb(253, 224, 71),
        subdued: Color32::GRAY,
        central_panel: Color32::from_rgb(12, 12, 14),
        card: Color32::from_rgb(24, 24, 27),
        tile: Color32::from_rgb(39, 39, 42),
        accent: Color32::from_rgb(234, 179, 8),
        accent_dim: Color32::from_rgb(113, 87, 10),
        info: Color32::from_rgb(96, 165, 250),
        error_fill: Color32::from_rgb(69, 10, 10),
        error_text: Color32::from_rgb(252, 165, 165),
        success_fill: Color32::from_rgb(5, 46, 22),
        success_text: Color32::from_rgb(134, 239, 172),
    },
    form_max_width: 640.0,
};

impl UiConfig {
    /// Frame for the input and result cards
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.accent_dim),
            inner_margin: Margin::same(20),
            corner_radius: CornerRadius::same(12),
            ..Default::default()
        }
    }

    /// Frame for the error / success banners
    pub fn banner_frame(&self, fill: Color32, text: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::new(1.0, text.linear_multiply(0.5)),
            inner_margin: Margin::symmetric(16, 10),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Small tiles inside the result card
    pub fn tile_frame(&self) -> Frame {
        Frame {
            fill: self.colors.tile,
            inner_margin: Margin::same(8),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }
}
