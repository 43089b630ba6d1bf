//! Application state and core logic

use crate::api::{RegistrationApi, RegistrationClient, SubmitOutcome};
use crate::config::TuiConfig;
use crate::state::{
    AppState, FieldInput, FieldKey, FormRow, ServerOutcome, FOOD_CHOICES, LANGUAGE_CHOICES,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Banner text when the endpoint produced no usable response
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Could not reach the registration service. Please try again.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the registration endpoint
    client: Box<dyn RegistrationApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_default();
        let client = RegistrationClient::from_config(&config);
        tracing::debug!(endpoint = client.endpoint(), "registration client ready");
        Self {
            state: AppState::default(),
            client: Box::new(client),
            quit: false,
        }
    }

    #[cfg(test)]
    fn with_client(client: Box<dyn RegistrationApi>) -> Self {
        Self {
            state: AppState::default(),
            client,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_row();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_row();
                return Ok(());
            }
            _ => {}
        }

        match self.state.active_row {
            FormRow::Username => self.handle_username_key(key),
            FormRow::FavLanguage => self.handle_choice_key(key, FieldKey::FavLanguage),
            FormRow::FavFood => self.handle_choice_key(key, FieldKey::FavFood),
            FormRow::Agreement => self.handle_agreement_key(key),
            FormRow::Submit => {
                // Enablement gates the control, not submit() itself
                if key.code == KeyCode::Enter && self.state.submit_enabled {
                    self.submit().await;
                }
            }
        }

        Ok(())
    }

    fn handle_username_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let mut value = self.state.fields.username.clone();
                value.push(c);
                self.state
                    .apply_edit(FieldKey::Username, FieldInput::Text(value));
            }
            KeyCode::Backspace => {
                let mut value = self.state.fields.username.clone();
                value.pop();
                self.state
                    .apply_edit(FieldKey::Username, FieldInput::Text(value));
            }
            KeyCode::Enter => self.state.next_row(),
            _ => {}
        }
    }

    /// Radio and select rows share the same cycling interaction
    fn handle_choice_key(&mut self, key: KeyEvent, field: FieldKey) {
        let choices: &[&str] = match field {
            FieldKey::FavLanguage => &LANGUAGE_CHOICES,
            _ => &FOOD_CHOICES,
        };
        let current = match field {
            FieldKey::FavLanguage => self.state.fields.fav_language.clone(),
            _ => self.state.fields.fav_food.clone(),
        };

        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                let value = cycle_choice(choices, &current, 1);
                self.state.apply_edit(field, FieldInput::Text(value));
            }
            KeyCode::Left => {
                let value = cycle_choice(choices, &current, -1);
                self.state.apply_edit(field, FieldInput::Text(value));
            }
            KeyCode::Enter => self.state.next_row(),
            _ => {}
        }
    }

    fn handle_agreement_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => {
                let checked = !self.state.fields.agreement;
                self.state
                    .apply_edit(FieldKey::Agreement, FieldInput::Checked(checked));
            }
            KeyCode::Enter => self.state.next_row(),
            _ => {}
        }
    }

    /// Send the current field set to the registration endpoint
    ///
    /// The field set is not re-validated here; enablement gating lives at
    /// the submit control.
    async fn submit(&mut self) {
        let fields = self.state.fields.clone();
        tracing::debug!(username = %fields.username, "submitting registration");

        match self.client.register(&fields).await {
            Ok(SubmitOutcome::Accepted(message)) => {
                self.state.reset_fields();
                self.state.record_outcome(ServerOutcome::Success(message));
            }
            Ok(SubmitOutcome::Rejected(message)) => {
                self.state.record_outcome(ServerOutcome::Failure(message));
            }
            Err(err) => {
                tracing::warn!("registration request failed: {err:#}");
                self.state.record_outcome(ServerOutcome::Failure(
                    TRANSPORT_FAILURE_MESSAGE.to_string(),
                ));
            }
        }
    }
}

/// Step through a choice list, wrapping at either end
///
/// A current value outside the list (the unselected radio state) lands on
/// the first or last entry depending on direction.
fn cycle_choice(choices: &[&str], current: &str, step: isize) -> String {
    let len = choices.len() as isize;
    let next = match choices.iter().position(|&c| c == current) {
        Some(index) => (index as isize + step).rem_euclid(len),
        None if step >= 0 => 0,
        None => len - 1,
    };
    choices[next as usize].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRegistrationApi;
    use crate::state::validation::USERNAME_MIN_MSG;
    use anyhow::anyhow;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_mock(mock: MockRegistrationApi) -> App {
        App::with_client(Box::new(mock))
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Drive the form to a fully valid state via key events
    async fn fill_valid_form(app: &mut App) {
        type_str(app, "alice").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        // favLanguage: javascript -> rust
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        // favFood: "" -> pizza
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
    }

    #[test]
    fn test_cycle_choice_forward_and_back() {
        assert_eq!(cycle_choice(&LANGUAGE_CHOICES, "", 1), "javascript");
        assert_eq!(cycle_choice(&LANGUAGE_CHOICES, "javascript", 1), "rust");
        assert_eq!(cycle_choice(&LANGUAGE_CHOICES, "rust", 1), "javascript");
        assert_eq!(cycle_choice(&LANGUAGE_CHOICES, "", -1), "rust");
        assert_eq!(cycle_choice(&FOOD_CHOICES, "", 1), "pizza");
        assert_eq!(cycle_choice(&FOOD_CHOICES, "pizza", -1), "");
        assert_eq!(cycle_choice(&FOOD_CHOICES, "broccoli", 1), "");
    }

    #[tokio::test]
    async fn test_typing_short_username_sets_inline_error() {
        let mut app = app_with_mock(MockRegistrationApi::new());
        type_str(&mut app, "ab").await;

        assert_eq!(app.state.errors.get(FieldKey::Username), USERNAME_MIN_MSG);
        assert!(!app.state.submit_enabled);

        type_str(&mut app, "c").await;
        assert_eq!(app.state.errors.get(FieldKey::Username), "");
    }

    #[tokio::test]
    async fn test_filling_whole_form_enables_submit() {
        let mut app = app_with_mock(MockRegistrationApi::new());
        fill_valid_form(&mut app).await;

        assert_eq!(app.state.fields.username, "alice");
        assert_eq!(app.state.fields.fav_language, "rust");
        assert_eq!(app.state.fields.fav_food, "pizza");
        assert!(app.state.fields.agreement);
        assert!(app.state.submit_enabled);
        assert_eq!(app.state.active_row, FormRow::Submit);
    }

    #[tokio::test]
    async fn test_accepted_submission_resets_form_and_shows_success() {
        let mut mock = MockRegistrationApi::new();
        mock.expect_register()
            .withf(|fields| fields.username == "alice" && fields.agreement)
            .times(1)
            .returning(|_| Ok(SubmitOutcome::Accepted("Success! Welcome alice".to_string())));

        let mut app = app_with_mock(mock);
        fill_valid_form(&mut app).await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.fields, Default::default());
        assert!(!app.state.submit_enabled);
        assert_eq!(
            app.state.outcome.success_message(),
            Some("Success! Welcome alice")
        );
        assert_eq!(app.state.outcome.failure_message(), None);
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_form_and_shows_failure() {
        let mut mock = MockRegistrationApi::new();
        mock.expect_register()
            .times(1)
            .returning(|_| Ok(SubmitOutcome::Rejected("username already taken".to_string())));

        let mut app = app_with_mock(mock);
        fill_valid_form(&mut app).await;
        let before = app.state.fields.clone();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.fields, before);
        assert_eq!(
            app.state.outcome.failure_message(),
            Some("username already taken")
        );
        assert_eq!(app.state.outcome.success_message(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_banner() {
        let mut mock = MockRegistrationApi::new();
        mock.expect_register()
            .times(1)
            .returning(|_| Err(anyhow!("connection refused")));

        let mut app = app_with_mock(mock);
        fill_valid_form(&mut app).await;
        let before = app.state.fields.clone();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.fields, before);
        assert_eq!(
            app.state.outcome.failure_message(),
            Some(TRANSPORT_FAILURE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_enter_on_disabled_submit_does_nothing() {
        let mut mock = MockRegistrationApi::new();
        mock.expect_register().times(0);

        let mut app = app_with_mock(mock);
        // Invalid form: only the username is filled
        type_str(&mut app, "alice").await;
        while app.state.active_row != FormRow::Submit {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert_eq!(app.state.outcome, ServerOutcome::None);
    }

    #[tokio::test]
    async fn test_new_outcome_replaces_old_banner() {
        let mut mock = MockRegistrationApi::new();
        let mut rejected = true;
        mock.expect_register().times(2).returning(move |_| {
            if rejected {
                rejected = false;
                Ok(SubmitOutcome::Rejected("username already taken".to_string()))
            } else {
                Ok(SubmitOutcome::Accepted("Success! Welcome alice".to_string()))
            }
        });

        let mut app = app_with_mock(mock);
        fill_valid_form(&mut app).await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.outcome.failure_message().is_some());

        // Rejection leaves the form populated and valid, so resubmit directly
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.outcome.success_message().is_some());
        assert_eq!(app.state.outcome.failure_message(), None);
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut app = app_with_mock(MockRegistrationApi::new());
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_back_tab_moves_focus_backwards() {
        let mut app = app_with_mock(MockRegistrationApi::new());
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        assert_eq!(app.state.active_row, FormRow::Submit);
    }
}
