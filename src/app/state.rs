// src/app/state.rs

use std::collections::HashMap;

use crate::{
    domain::{FieldParseError, FormField, FormState},
    utils::AppInstant,
};

#[derive(Clone, Copy)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Probing(ProbingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Probing(ProbingState::default())
    }
}

/// Waiting for the first health answer before showing the form.
#[derive(Clone, Copy)]
pub(crate) struct ProbingState {
    pub(crate) started: AppInstant,
}

impl Default for ProbingState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
        }
    }
}

/// Text currently typed into the free-form inputs. Month is a dropdown and needs no buffer.
#[derive(Default, Clone)]
pub(crate) struct FieldInputs {
    pub(crate) year: String,
    pub(crate) day: String,
    pub(crate) inflation: String,
    pub(crate) rejected: HashMap<FormField, FieldParseError>,
}

impl FieldInputs {
    pub(crate) fn from_form(form: &FormState) -> Self {
        let mut inputs = Self::default();
        inputs.sync_from(form);
        inputs
    }

    /// Overwrite every buffer with what the form holds (after a preset, for example).
    pub(crate) fn sync_from(&mut self, form: &FormState) {
        self.year = form.field_text(FormField::Year);
        self.day = form.field_text(FormField::Day);
        self.inflation = form.field_text(FormField::InflationRate);
        self.rejected.clear();
    }

    pub(crate) fn buffer_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Year => Some(&mut self.year),
            FormField::Day => Some(&mut self.day),
            FormField::InflationRate => Some(&mut self.inflation),
            FormField::Month => None,
        }
    }

    pub(crate) fn record(&mut self, field: FormField, outcome: Result<(), FieldParseError>) {
        match outcome {
            Ok(()) => {
                self.rejected.remove(&field);
            }
            Err(e) => {
                self.rejected.insert(field, e);
            }
        }
    }
}
