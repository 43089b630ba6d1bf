//! Application state definitions

use super::fields::{ErrorSet, FieldInput, FieldKey, FieldSet, ServerOutcome};
use super::validation;

/// Focusable rows of the registration form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormRow {
    #[default]
    Username,
    FavLanguage,
    FavFood,
    Agreement,
    Submit,
}

impl FormRow {
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::FavLanguage,
            Self::FavLanguage => Self::FavFood,
            Self::FavFood => Self::Agreement,
            Self::Agreement => Self::Submit,
            Self::Submit => Self::Username,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Username => Self::Submit,
            Self::FavLanguage => Self::Username,
            Self::FavFood => Self::FavLanguage,
            Self::Agreement => Self::FavFood,
            Self::Submit => Self::Agreement,
        }
    }

}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current field values (also the wire body on submit)
    pub fields: FieldSet,
    /// Per-field validation messages
    pub errors: ErrorSet,
    /// Result of the last submission attempt
    pub outcome: ServerOutcome,
    /// Whether the submit control is currently available
    pub submit_enabled: bool,
    /// Which form row has focus
    pub active_row: FormRow,
}

impl AppState {
    pub fn next_row(&mut self) {
        self.active_row = self.active_row.next();
    }

    pub fn prev_row(&mut self) {
        self.active_row = self.active_row.prev();
    }

    /// Apply one edit to a field, re-validate that field, and refresh
    /// submit availability
    ///
    /// The field set is replaced rather than mutated in place so observers
    /// comparing snapshots see the change.
    pub fn apply_edit(&mut self, key: FieldKey, input: FieldInput) {
        let mut next = self.fields.clone();
        next.apply(key, input);
        self.fields = next;

        match validation::validate_field(key, &self.fields) {
            Some(message) => self.errors.set(key, message),
            None => self.errors.clear(key),
        }

        self.refresh_enablement();
    }

    /// Recompute whether the whole field set passes the schema
    pub fn refresh_enablement(&mut self) {
        self.submit_enabled = validation::is_valid(&self.fields);
    }

    /// Record the outcome of a submission attempt; replaces any previous
    /// outcome wholesale
    pub fn record_outcome(&mut self, outcome: ServerOutcome) {
        self.outcome = outcome;
    }

    /// Reset the field set to defaults after an accepted submission
    ///
    /// Error messages are left alone: they still describe the most recent
    /// per-field checks, which ran before the reset.
    pub fn reset_fields(&mut self) {
        self.fields = FieldSet::default();
        self.refresh_enablement();
    }
}
