//! Operations that go through the controller, including network calls

use crate::controller::FormField;

use super::{App, Focus};

impl App {
    pub async fn mount(&mut self) {
        self.controller.mount().await;
        self.clamp_selection();
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut value = self.controller.form().value(field).to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.controller.form().value(field).to_string();
            value.pop();
            self.set_field(field, value);
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_field() {
            self.set_field(field, String::new());
        }
    }

    /// Submit if the form is ready as it stands, then commit the focused field
    ///
    /// Readiness is read before the blur: a not-yet-validated alias keeps the
    /// button disabled, so Enter only validates it and nothing is sent.
    pub async fn submit(&mut self) {
        let ready = self.controller.is_ready_for_submit();
        self.blur_current();
        if !ready {
            return;
        }
        let action = self.controller.submit().await;
        self.controller.dispatch(action).await;
        self.clamp_selection();
    }

    pub fn copy_selected(&mut self) {
        if let Some(short_url) = self.selected_url().map(|u| u.short_url.clone()) {
            self.controller.copy_short_url(&short_url);
        }
    }

    pub fn open_selected(&self) {
        if let Some(url) = self.selected_url() {
            self.controller.open_short_url(&url.short_url);
        }
    }

    pub async fn delete_selected(&mut self) {
        let Some(alias) = self.selected_url().map(|u| u.alias.clone()) else {
            return;
        };
        let action = self.controller.delete_alias(&alias).await;
        self.controller.dispatch(action).await;
        self.clamp_selection();
    }

    fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            Focus::Url => Some(FormField::Url),
            Focus::Alias => Some(FormField::Alias),
            Focus::Submit | Focus::Table => None,
        }
    }

    fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Url => self.controller.set_url(value),
            FormField::Alias => self.controller.set_alias(value),
        }
    }
}
