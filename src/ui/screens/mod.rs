mod form;
mod probing;

pub(crate) use form::render_form;
pub(crate) use probing::render_probing;
