//! Validation rules for the registration fields
//!
//! Each field carries an ordered rule table evaluated first-failure-wins:
//! the first rule whose predicate rejects the candidate value supplies the
//! error message, and later rules are not consulted. Validation is pure and
//! synchronous, so per-keystroke checks cannot resolve out of order.

use super::fields::{FieldKey, FieldSet, FOOD_CHOICES, LANGUAGE_CHOICES};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;

pub const USERNAME_REQUIRED: &str = "username is required";
pub const USERNAME_MIN_MSG: &str = "username must be at least 3 characters";
pub const USERNAME_MAX_MSG: &str = "username cannot exceed 20 characters";
pub const FAV_LANGUAGE_REQUIRED: &str = "favLanguage is required";
pub const FAV_LANGUAGE_OPTIONS: &str = "favLanguage must be either javascript or rust";
pub const FAV_FOOD_REQUIRED: &str = "favFood is required";
pub const FAV_FOOD_OPTIONS: &str = "favFood must be either broccoli, spaghetti or pizza";
pub const AGREEMENT_ACCEPTED: &str = "agreement must be accepted";

/// One entry in a field's rule table
struct Rule<T: ?Sized + 'static> {
    check: fn(&T) -> bool,
    message: &'static str,
}

const USERNAME_RULES: &[Rule<str>] = &[
    Rule {
        check: |s| !s.is_empty(),
        message: USERNAME_REQUIRED,
    },
    Rule {
        check: |s| s.chars().count() >= USERNAME_MIN,
        message: USERNAME_MIN_MSG,
    },
    Rule {
        check: |s| s.chars().count() <= USERNAME_MAX,
        message: USERNAME_MAX_MSG,
    },
];

const FAV_LANGUAGE_RULES: &[Rule<str>] = &[
    Rule {
        check: |s| !s.is_empty(),
        message: FAV_LANGUAGE_REQUIRED,
    },
    Rule {
        check: |s| LANGUAGE_CHOICES.contains(&s),
        message: FAV_LANGUAGE_OPTIONS,
    },
];

const FAV_FOOD_RULES: &[Rule<str>] = &[
    Rule {
        check: |s| !s.is_empty(),
        message: FAV_FOOD_REQUIRED,
    },
    Rule {
        check: |s| FOOD_CHOICES[1..].contains(&s),
        message: FAV_FOOD_OPTIONS,
    },
];

const AGREEMENT_RULES: &[Rule<bool>] = &[Rule {
    check: |agreed| *agreed,
    message: AGREEMENT_ACCEPTED,
}];

fn first_violation<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

/// Validate a single field in isolation
///
/// String fields are trimmed before the rules run. Returns the first
/// violated rule's message, or `None` when the field passes.
pub fn validate_field(key: FieldKey, fields: &FieldSet) -> Option<&'static str> {
    match key {
        FieldKey::Username => first_violation(USERNAME_RULES, fields.username.trim()),
        FieldKey::FavLanguage => first_violation(FAV_LANGUAGE_RULES, fields.fav_language.trim()),
        FieldKey::FavFood => first_violation(FAV_FOOD_RULES, fields.fav_food.trim()),
        FieldKey::Agreement => first_violation(AGREEMENT_RULES, &fields.agreement),
    }
}

/// Whole-form validity: the conjunction of all four field checks
pub fn is_valid(fields: &FieldSet) -> bool {
    FieldKey::ALL
        .iter()
        .all(|&key| validate_field(key, fields).is_none())
}
