//! Form field value objects

use crate::validation::{self, FieldKey};

/// How a field accepts and displays input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text entry
    Text,
    /// Free text entry rendered masked unless revealed
    Secret,
    /// Value chosen from a fixed option list
    Select,
}

/// A single form field: its key, current value, and current validation message
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: FieldKey,
    pub kind: FieldKind,
    pub value: String,
    pub message: String,
}

impl FormField {
    pub fn new(key: FieldKey, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            value: String::new(),
            message: String::new(),
        }
    }

    /// Display label for rendering
    pub fn label(&self) -> String {
        self.key.label()
    }

    /// Whether the field currently carries no validation message
    pub fn is_valid(&self) -> bool {
        self.message.is_empty()
    }

    /// Re-run this field's rule against its current value
    pub fn revalidate(&mut self) {
        self.message = validation::validate_field(self.key, &self.value);
    }

    /// Append a character to the value (ignored for select fields)
    pub fn push_char(&mut self, c: char) {
        if self.kind != FieldKind::Select {
            self.value.push(c);
        }
    }

    /// Remove the last character from the value (ignored for select fields)
    pub fn pop_char(&mut self) {
        if self.kind != FieldKind::Select {
            self.value.pop();
        }
    }

    /// Clear the value and any validation message
    pub fn clear(&mut self) {
        self.value.clear();
        self.message.clear();
    }

    /// Value as shown on screen; secrets are masked unless revealed
    pub fn display_value(&self, reveal_secret: bool) -> String {
        if self.kind == FieldKind::Secret && !reveal_secret {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
