//! Registration form state and field navigation

use super::field::{FieldKind, FormField};
use crate::validation::{
    self, city_options, FieldKey, FormValues, SubmitOutcome, ValidationMessages, ALL_FIELDS,
    COUNTRY_OPTIONS,
};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Index of the trailing buttons row in the tab cycle
pub const BUTTONS_ROW_INDEX: usize = 10;

pub const BUTTON_RESET: usize = 0;
pub const BUTTON_SUBMIT: usize = 1;

/// The registration form: ten fields plus a buttons row
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Reset, 1=Submit)
    pub selected_button: usize,
    /// Whether the password field renders unmasked
    pub show_password: bool,
}

fn kind_for(key: FieldKey) -> FieldKind {
    match key {
        FieldKey::Password => FieldKind::Secret,
        FieldKey::Country | FieldKey::City => FieldKind::Select,
        _ => FieldKind::Text,
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: ALL_FIELDS
                .iter()
                .map(|key| FormField::new(*key, kind_for(*key)))
                .collect(),
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
            show_password: false,
        }
    }

    pub fn field(&self, key: FieldKey) -> &FormField {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .expect("every FieldKey has a field")
    }

    fn field_mut(&mut self, key: FieldKey) -> &mut FormField {
        self.fields
            .iter_mut()
            .find(|f| f.key == key)
            .expect("every FieldKey has a field")
    }

    /// Current value of a field
    pub fn value(&self, key: FieldKey) -> &str {
        &self.field(key).value
    }

    /// Current validation message of a field (empty = valid)
    pub fn message(&self, key: FieldKey) -> &str {
        &self.field(key).message
    }

    /// Apply a field change and validate that field only.
    ///
    /// Selecting a different country invalidates the city selection, so the
    /// city value and message are cleared before the change is applied.
    pub fn on_field_change(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        if key == FieldKey::Country && value != self.value(FieldKey::Country) {
            self.field_mut(FieldKey::City).clear();
        }
        let field = self.field_mut(key);
        field.value = value;
        field.revalidate();
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            if field.kind != FieldKind::Select {
                field.push_char(c);
                field.revalidate();
            }
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            if field.kind != FieldKind::Select {
                field.pop_char();
                field.revalidate();
            }
        }
    }

    /// Option list for a select field, given the current form state
    pub fn options_for(&self, key: FieldKey) -> &'static [&'static str] {
        match key {
            FieldKey::Country => COUNTRY_OPTIONS,
            FieldKey::City => city_options(self.value(FieldKey::Country)),
            _ => &[],
        }
    }

    /// Step the active select field forward or backward through its options
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.get_field(self.active_field_index) else {
            return;
        };
        if field.kind != FieldKind::Select {
            return;
        }
        let key = field.key;
        let options = self.options_for(key);
        if options.is_empty() {
            return;
        }

        let current = options.iter().position(|o| *o == self.value(key));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) if i == 0 => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.on_field_change(key, options[next]);
    }

    /// Snapshot of all current values
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.key, f.value.clone()))
            .collect()
    }

    /// Snapshot of all non-empty validation messages
    pub fn messages(&self) -> ValidationMessages {
        self.fields
            .iter()
            .filter(|f| !f.message.is_empty())
            .map(|f| (f.key, f.message.clone()))
            .collect()
    }

    /// Run submit-time validation and publish the replacement message map.
    ///
    /// Fields absent from the outcome have their messages cleared, so stale
    /// per-field format errors do not outlive a submit pass.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = validation::validate_form(&self.values());
        for field in &mut self.fields {
            field.message = outcome
                .messages
                .get(&field.key)
                .cloned()
                .unwrap_or_default();
        }
        outcome
    }

    /// Clear all values, messages, and selection state
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = BUTTON_SUBMIT;
        self.show_password = false;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // ten fields plus the buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.fields.get_mut(index)
    }
}
