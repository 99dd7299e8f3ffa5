//! Application struct and key event dispatch

use crate::config::TuiConfig;
use crate::state::{AppState, FieldKind, Form, BUTTON_RESET, BUTTON_SUBMIT};
use crate::validation::FieldKey;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current session state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, applying configured defaults
    pub fn new(config: &TuiConfig) -> Self {
        let mut state = AppState::default();

        if let Some(ref country) = config.default_country {
            state
                .form
                .on_field_change(FieldKey::Country, country.clone());
        }
        if config.mask_password == Some(false) {
            state.form.show_password = true;
        }

        Self { state, quit: false }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return Ok(());
            }
            KeyCode::Char('v') if ctrl => {
                self.state.form.toggle_password_visibility();
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
                return Ok(());
            }
            _ => {}
        }

        if self.state.form.is_buttons_row_active() {
            self.handle_buttons_key(key);
        } else if self.active_field_is_select() {
            self.handle_select_key(key);
        } else {
            self.handle_text_key(key);
        }

        Ok(())
    }

    fn active_field_is_select(&self) -> bool {
        self.state
            .form
            .get_field(self.state.form.active_field_index)
            .is_some_and(|f| f.kind == FieldKind::Select)
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.form.prev_button(),
            KeyCode::Right => self.state.form.next_button(),
            KeyCode::Enter => match self.state.form.selected_button {
                BUTTON_RESET => self.reset_form(),
                BUTTON_SUBMIT => self.submit(),
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.form.cycle_option(true);
            }
            KeyCode::Left => self.state.form.cycle_option(false),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            // Enter moves on, so the form can be filled top to bottom
            KeyCode::Enter => self.state.form.next_field(),
            _ => {}
        }
    }

    /// Run submit-time validation and record the submission if it passes
    fn submit(&mut self) {
        let outcome = self.state.form.submit();
        if outcome.valid {
            let values = self.state.form.values();
            tracing::info!(?values, "form submitted successfully");
            self.state.submitted = Some(values);
            self.state.status_message = Some("Form submitted successfully".to_string());
        } else {
            let count = outcome.messages.len();
            self.state.status_message = Some(format!("{count} field(s) need attention"));
        }
    }

    fn reset_form(&mut self) {
        self.state.reset();
        self.state.status_message = Some("Form cleared".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BUTTONS_ROW_INDEX;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn new_app() -> App {
        App::new(&TuiConfig::default())
    }

    fn fill_form(app: &mut App) {
        let form = &mut app.state.form;
        form.on_field_change(FieldKey::FirstName, "Asha");
        form.on_field_change(FieldKey::LastName, "Verma");
        form.on_field_change(FieldKey::Email, "asha@example.com");
        form.on_field_change(FieldKey::Username, "asha_v");
        form.on_field_change(FieldKey::Password, "Abcdef1!");
        form.on_field_change(FieldKey::PhoneNumber, "1234567890");
        form.on_field_change(FieldKey::PanNumber, "ABCDE1234F");
        form.on_field_change(FieldKey::AadharNumber, "123456789012");
        form.on_field_change(FieldKey::Country, "India");
        form.on_field_change(FieldKey::City, "Kanpur");
    }

    #[test]
    fn test_typing_fills_active_field_and_validates() {
        let mut app = new_app();
        type_str(&mut app, "Asha");
        assert_eq!(app.state.form.value(FieldKey::FirstName), "Asha");
        assert_eq!(app.state.form.message(FieldKey::FirstName), "");
    }

    #[test]
    fn test_tab_moves_to_next_field() {
        let mut app = new_app();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(&mut app, "a@b.com");
        assert_eq!(app.state.form.value(FieldKey::Email), "a@b.com");
    }

    #[test]
    fn test_backspace_edits_active_field() {
        let mut app = new_app();
        type_str(&mut app, "Ashaa");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.state.form.value(FieldKey::FirstName), "Asha");
    }

    #[test]
    fn test_space_cycles_country_select() {
        let mut app = new_app();
        app.state.form.set_active_field(8); // country
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.state.form.value(FieldKey::Country), "India");
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.state.form.value(FieldKey::Country), "United States");
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.state.form.value(FieldKey::Country), "India");
    }

    #[test]
    fn test_ctrl_v_toggles_password_visibility() {
        let mut app = new_app();
        assert!(!app.state.form.show_password);
        app.handle_key(ctrl('v')).unwrap();
        assert!(app.state.form.show_password);
        app.handle_key(ctrl('v')).unwrap();
        assert!(!app.state.form.show_password);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = new_app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = new_app();
        app.handle_key(ctrl('c')).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_submit_empty_form_records_nothing() {
        let mut app = new_app();
        app.handle_key(ctrl('s')).unwrap();
        assert!(app.state.submitted.is_none());
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("10 field(s) need attention")
        );
    }

    #[test]
    fn test_submit_filled_form_records_values() {
        let mut app = new_app();
        fill_form(&mut app);
        app.handle_key(ctrl('s')).unwrap();
        let submitted = app.state.submitted.as_ref().unwrap();
        assert_eq!(submitted.get(&FieldKey::Email).unwrap(), "asha@example.com");
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Form submitted successfully")
        );
    }

    #[test]
    fn test_enter_on_submit_button_submits() {
        let mut app = new_app();
        fill_form(&mut app);
        app.state.form.set_active_field(BUTTONS_ROW_INDEX);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.state.submitted.is_some());
    }

    #[test]
    fn test_enter_on_reset_button_clears_form() {
        let mut app = new_app();
        fill_form(&mut app);
        app.state.form.set_active_field(BUTTONS_ROW_INDEX);
        app.handle_key(key(KeyCode::Left)).unwrap(); // Submit -> Reset
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.form.value(FieldKey::FirstName), "");
        assert_eq!(app.state.status_message.as_deref(), Some("Form cleared"));
    }

    #[test]
    fn test_enter_on_text_field_advances() {
        let mut app = new_app();
        type_str(&mut app, "Asha");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        type_str(&mut app, "Verma");
        assert_eq!(app.state.form.value(FieldKey::LastName), "Verma");
    }

    #[test]
    fn test_config_default_country_is_applied() {
        let config = TuiConfig {
            default_country: Some("India".to_string()),
            ..Default::default()
        };
        let app = App::new(&config);
        assert_eq!(app.state.form.value(FieldKey::Country), "India");
        assert_eq!(app.state.form.message(FieldKey::Country), "");
    }

    #[test]
    fn test_config_can_disable_masking() {
        let config = TuiConfig {
            mask_password: Some(false),
            ..Default::default()
        };
        let app = App::new(&config);
        assert!(app.state.form.show_password);
    }
}
