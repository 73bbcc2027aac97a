mod phases;
mod root;
mod shortcuts;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use shortcuts::{Shortcuts, nudge_steps};
pub(crate) use state::{AppState, FieldInputs, ProbingState, RunningState};

pub use root::App;
