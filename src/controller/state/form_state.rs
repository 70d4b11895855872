//! Form draft state
//!
//! Raw field values plus the touched flag and derived error of each field.
//! Transitions that recompute errors live in `controller::validation`.

/// Form field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Url,
    Alias,
}

/// Draft of the "shorten a new URL" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub url: String,
    pub alias: String,
    pub url_touched: bool,
    pub alias_touched: bool,
    pub url_error: Option<String>,
    pub alias_error: Option<String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial state: empty values, untouched, no errors
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Url => &self.url,
            FormField::Alias => &self.alias,
        }
    }
}
