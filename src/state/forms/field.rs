//! Form field value objects

use crate::validation::FieldId;

/// A single text input with its label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    value: String,
    /// Render the value as `*` characters
    pub is_masked: bool,
}

impl FormField {
    /// Create an empty field labelled after its id
    pub fn new(id: FieldId) -> Self {
        Self {
            label: id.label().to_string(),
            value: String::new(),
            is_masked: false,
        }
    }

    /// Create an empty field whose value is hidden when rendered
    pub fn masked(id: FieldId) -> Self {
        Self {
            is_masked: true,
            ..Self::new(id)
        }
    }

    /// Raw value as typed, untrimmed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed, as the validators see it
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character. Returns false if the field was already empty.
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
