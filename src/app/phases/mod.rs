pub(super) mod phase_view;
pub(super) mod probing;
pub(super) mod running;

pub(crate) use phase_view::PhaseView;
