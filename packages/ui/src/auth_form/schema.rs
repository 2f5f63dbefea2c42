//! Validation schema for credential input.
//!
//! [`Schema::for_mode`] picks the per-field rules for a [`FormMode`] and
//! [`Schema::validate`] turns raw [`CredentialInput`] into [`Credentials`] or
//! a set of [`FieldErrors`]. Each field reports only its first failing rule.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::mode::{Field, FormMode};

pub const NAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

// Local part may not start with a dot or contain "..": checked outside the
// pattern since `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Raw values as typed, all empty when the form mounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CredentialInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Input that passed validation. `name` is only present in sign-up mode.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Minimum length in characters.
    MinLength(usize),
    Email,
}

impl Rule {
    fn check(&self, field: Field, value: &str) -> Result<(), String> {
        match self {
            Rule::MinLength(min) => {
                if value.chars().count() >= *min {
                    Ok(())
                } else {
                    Err(format!(
                        "{} must contain at least {min} characters",
                        field.label()
                    ))
                }
            }
            Rule::Email => {
                if is_valid_email(value) {
                    Ok(())
                } else {
                    Err("Invalid email address".to_string())
                }
            }
        }
    }
}

/// Per-field error messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Drop the message for a field the user just edited.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Replace every message with the outcome of a submit attempt.
    pub fn apply(&mut self, outcome: Result<(), FieldErrors>) {
        *self = outcome.err().unwrap_or_default();
    }

    fn insert_first(&mut self, field: Field, message: String) {
        self.errors.entry(field).or_insert(message);
    }
}

/// The rule set for one form mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    rules: Vec<(Field, Vec<Rule>)>,
}

impl Schema {
    pub fn for_mode(mode: FormMode) -> Self {
        let mut rules = Vec::with_capacity(3);
        if mode.requires_name() {
            rules.push((Field::Name, vec![Rule::MinLength(NAME_MIN_LEN)]));
        }
        rules.push((Field::Email, vec![Rule::Email]));
        rules.push((Field::Password, vec![Rule::MinLength(PASSWORD_MIN_LEN)]));
        Self { rules }
    }

    /// Whether the field takes part in validation at all.
    pub fn covers(&self, field: Field) -> bool {
        self.rules.iter().any(|(f, _)| *f == field)
    }

    pub fn validate(&self, input: &CredentialInput) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        for (field, rules) in &self.rules {
            let value = input.get(*field);
            for rule in rules {
                if let Err(message) = rule.check(*field, value) {
                    errors.insert_first(*field, message);
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Credentials {
            name: self.covers(Field::Name).then(|| input.name.clone()),
            email: input.email.clone(),
            password: input.password.clone(),
        })
    }
}
