//! Form modes, fields and navigation targets for the authentication form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which authentication flow the form is rendering for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormMode {
    SignIn,
    SignUp,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::SignIn => "sign-in",
            FormMode::SignUp => "sign-up",
        }
    }

    /// The opposite flow, used by the switch link under the form.
    pub fn other(&self) -> FormMode {
        match self {
            FormMode::SignIn => FormMode::SignUp,
            FormMode::SignUp => FormMode::SignIn,
        }
    }

    /// Whether the name field is shown and validated.
    pub fn requires_name(&self) -> bool {
        matches!(self, FormMode::SignUp)
    }

    /// Fields rendered for this mode, in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormMode::SignIn => &[Field::Email, Field::Password],
            FormMode::SignUp => &[Field::Name, Field::Email, Field::Password],
        }
    }

    /// The route that renders this mode.
    pub fn destination(&self) -> Destination {
        match self {
            FormMode::SignIn => Destination::SignIn,
            FormMode::SignUp => Destination::SignUp,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Welcome back",
            FormMode::SignUp => "Create your account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign-In",
            FormMode::SignUp => "Create an account",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Don't have an account?",
            FormMode::SignUp => "Already have an account?",
        }
    }

    /// Label of the link to the other flow. Matches that flow's submit label.
    pub fn switch_label(&self) -> &'static str {
        self.other().submit_label()
    }

    pub fn switch_destination(&self) -> Destination {
        self.other().destination()
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Welcome back!",
            FormMode::SignUp => "Account created successfully. Please sign in.",
        }
    }

    /// Where a successful submission lands: new accounts still have to sign in.
    pub fn success_destination(&self) -> Destination {
        match self {
            FormMode::SignIn => Destination::Home,
            FormMode::SignUp => Destination::SignIn,
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sign-in" => Ok(FormMode::SignIn),
            "sign-up" => Ok(FormMode::SignUp),
            _ => Err(format!("Unknown form mode: {s}")),
        }
    }
}

/// One input of the authentication form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "auth-name",
            Field::Email => "auth-email",
            Field::Password => "auth-password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "example@example.com",
            Field::Password => "Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Client-side navigation targets used by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    SignIn,
    SignUp,
}

impl Destination {
    /// Absolute route path.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::SignIn => "/sign-in",
            Destination::SignUp => "/sign-up",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
