mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use screens::{render_form, render_probing};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{render_startup_failure, render_status_panel};
