//! Form field value objects for the registration form

use serde::Serialize;

/// Accepted favorite-language values, in display order
pub const LANGUAGE_CHOICES: [&str; 2] = ["javascript", "rust"];

/// Favorite-food select options; the leading empty entry is the placeholder
pub const FOOD_CHOICES: [&str; 4] = ["", "pizza", "spaghetti", "broccoli"];

/// Identifies one of the four registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Username,
        FieldKey::FavLanguage,
        FieldKey::FavFood,
        FieldKey::Agreement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FavLanguage => "Favorite Language",
            Self::FavFood => "Favorite Food",
            Self::Agreement => "Agreement",
        }
    }
}

/// Raw input carried by a single edit event
///
/// Checkbox fields take the checked signal; text, radio and select fields
/// take the string value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

/// Current values of the four registration fields
///
/// Doubles as the wire body for the registration endpoint, so the two
/// camelCase keys are preserved on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FieldSet {
    /// Write a raw edit into the field at `key`
    ///
    /// Input kinds that don't match the field (a checked signal for a text
    /// field, or vice versa) are ignored.
    pub fn apply(&mut self, key: FieldKey, input: FieldInput) {
        match (key, input) {
            (FieldKey::Username, FieldInput::Text(value)) => self.username = value,
            (FieldKey::FavLanguage, FieldInput::Text(value)) => self.fav_language = value,
            (FieldKey::FavFood, FieldInput::Text(value)) => self.fav_food = value,
            (FieldKey::Agreement, FieldInput::Checked(checked)) => self.agreement = checked,
            _ => {}
        }
    }
}

/// Per-field validation messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorSet {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: String,
}

impl ErrorSet {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Username => &self.username,
            FieldKey::FavLanguage => &self.fav_language,
            FieldKey::FavFood => &self.fav_food,
            FieldKey::Agreement => &self.agreement,
        }
    }

    pub fn set(&mut self, key: FieldKey, message: impl Into<String>) {
        let slot = match key {
            FieldKey::Username => &mut self.username,
            FieldKey::FavLanguage => &mut self.fav_language,
            FieldKey::FavFood => &mut self.fav_food,
            FieldKey::Agreement => &mut self.agreement,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, key: FieldKey) {
        self.set(key, "");
    }

    #[allow(dead_code)]
    pub fn is_clear(&self) -> bool {
        FieldKey::ALL.iter().all(|&key| self.get(key).is_empty())
    }
}

/// Result of the last submission attempt
///
/// Success and failure are mutually exclusive; recording a new outcome
/// replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ServerOutcome {
    #[default]
    None,
    Success(String),
    Failure(String),
}

impl ServerOutcome {
    pub fn success_message(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_field_set_is_empty() {
        let fields = FieldSet::default();
        assert_eq!(fields.username, "");
        assert_eq!(fields.fav_language, "");
        assert_eq!(fields.fav_food, "");
        assert!(!fields.agreement);
    }

    #[test]
    fn test_apply_text_edits() {
        let mut fields = FieldSet::default();
        fields.apply(FieldKey::Username, FieldInput::Text("alice".to_string()));
        fields.apply(FieldKey::FavLanguage, FieldInput::Text("rust".to_string()));
        fields.apply(FieldKey::FavFood, FieldInput::Text("pizza".to_string()));
        assert_eq!(fields.username, "alice");
        assert_eq!(fields.fav_language, "rust");
        assert_eq!(fields.fav_food, "pizza");
    }

    #[test]
    fn test_apply_checked_edit() {
        let mut fields = FieldSet::default();
        fields.apply(FieldKey::Agreement, FieldInput::Checked(true));
        assert!(fields.agreement);
        fields.apply(FieldKey::Agreement, FieldInput::Checked(false));
        assert!(!fields.agreement);
    }

    #[test]
    fn test_apply_mismatched_input_is_ignored() {
        let mut fields = FieldSet::default();
        fields.apply(FieldKey::Username, FieldInput::Checked(true));
        assert_eq!(fields.username, "");
        fields.apply(FieldKey::Agreement, FieldInput::Text("yes".to_string()));
        assert!(!fields.agreement);
    }

    #[test]
    fn test_wire_body_uses_camel_case_keys() {
        let fields = FieldSet {
            username: "alice".to_string(),
            fav_language: "rust".to_string(),
            fav_food: "pizza".to_string(),
            agreement: true,
        };
        let body = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "username": "alice",
                "favLanguage": "rust",
                "favFood": "pizza",
                "agreement": true,
            })
        );
    }

    #[test]
    fn test_error_set_get_set_clear() {
        let mut errors = ErrorSet::default();
        assert!(errors.is_clear());

        errors.set(FieldKey::Username, "username is required");
        assert_eq!(errors.get(FieldKey::Username), "username is required");
        assert!(!errors.is_clear());

        errors.clear(FieldKey::Username);
        assert!(errors.is_clear());
    }

    #[test]
    fn test_server_outcome_is_mutually_exclusive() {
        let outcome = ServerOutcome::Success("welcome".to_string());
        assert_eq!(outcome.success_message(), Some("welcome"));
        assert_eq!(outcome.failure_message(), None);

        let outcome = ServerOutcome::Failure("taken".to_string());
        assert_eq!(outcome.success_message(), None);
        assert_eq!(outcome.failure_message(), Some("taken"));

        assert_eq!(ServerOutcome::default(), ServerOutcome::None);
    }

    #[test]
    fn test_field_key_labels() {
        assert_eq!(FieldKey::Username.label(), "Username");
        assert_eq!(FieldKey::FavLanguage.label(), "Favorite Language");
        assert_eq!(FieldKey::FavFood.label(), "Favorite Food");
        assert_eq!(FieldKey::Agreement.label(), "Agreement");
    }
}
