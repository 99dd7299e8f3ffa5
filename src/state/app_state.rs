//! Session state for the running application

use crate::state::RegistrationForm;
use crate::validation::FormValues;

/// State owned by the current form session
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The registration form being filled in
    pub form: RegistrationForm,
    /// Values of the most recent successful submission, if any
    pub submitted: Option<FormValues>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Discard the session: form values, messages, and any submission record
    pub fn reset(&mut self) {
        self.form.reset();
        self.submitted = None;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldKey;

    #[test]
    fn test_default_has_no_submission() {
        let state = AppState::default();
        assert!(state.submitted.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_reset_discards_submission_record() {
        let mut state = AppState::default();
        state.form.on_field_change(FieldKey::FirstName, "Asha");
        state.submitted = Some(state.form.values());
        state.status_message = Some("Form submitted successfully".to_string());
        state.reset();
        assert!(state.submitted.is_none());
        assert!(state.status_message.is_none());
        assert_eq!(state.form.value(FieldKey::FirstName), "");
    }
}
