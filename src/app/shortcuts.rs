use eframe::egui::Key;

use crate::config::FORM;

/// Function keys for `FORM.preset_years`, in the same order.
pub(crate) const PRESET_KEYS: [Key; 3] = [Key::F1, Key::F2, Key::F3];

/// What this frame's key presses ask the form to do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shortcuts {
    pub(crate) preset: Option<i32>,
    pub(crate) submit: bool,
}

impl Shortcuts {
    /// Presets are ignored while a text field has focus so function keys can't clobber a
    /// half-entered value. Enter does nothing while a request is in flight.
    pub(crate) fn from_keys(pressed: impl Fn(Key) -> bool, typing: bool, loading: bool) -> Self {
        let preset = if typing {
            None
        } else {
            PRESET_KEYS
                .iter()
                .zip(FORM.preset_years)
                .find(|(key, _)| pressed(**key))
                .map(|(_, year)| *year)
        };
        Self {
            preset,
            submit: !loading && pressed(Key::Enter),
        }
    }
}

/// Up/Down on the inflation field, as grid steps. Both at once cancel out.
pub(crate) fn nudge_steps(pressed: impl Fn(Key) -> bool) -> i32 {
    i32::from(pressed(Key::ArrowUp)) - i32::from(pressed(Key::ArrowDown))
}
