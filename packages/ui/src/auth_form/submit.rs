//! Submission flow and the capabilities it runs against.
//!
//! [`submit_credentials`] is what the form's submit handler calls. It needs
//! three collaborators, all injected:
//!
//! - a [`CredentialVerifier`], which would talk to an auth backend. The only
//!   implementation today is [`SimulatedVerifier`], which accepts everything.
//! - a [`Notify`] sink for toasts.
//! - a [`Navigate`] sink for client-side navigation.
//!
//! Closures implement both sinks, so the component can adapt the toast host
//! and the router without extra wrapper types.

use std::rc::Rc;

use thiserror::Error;

use super::mode::{Destination, FormMode};
use super::schema::{CredentialInput, Credentials, FieldErrors, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for the notification host.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

pub trait Notify {
    fn notify(&self, notification: Notification);
}

impl<F: Fn(Notification)> Notify for F {
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

pub trait Navigate {
    fn navigate(&self, to: Destination);
}

impl<F: Fn(Destination)> Navigate for F {
    fn navigate(&self, to: Destination) {
        self(to)
    }
}

/// Failures that are not the user's input being invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Checks validated credentials against an authentication backend.
pub trait CredentialVerifier {
    fn verify(&self, mode: FormMode, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Stand-in for a real backend: every well-formed submission succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedVerifier;

impl CredentialVerifier for SimulatedVerifier {
    fn verify(&self, _mode: FormMode, _credentials: &Credentials) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Shared handle to the verifier, provided through the Dioxus context.
///
/// Components fall back to [`Verifier::default`], the simulated backend, when
/// no verifier has been provided.
#[derive(Clone)]
pub struct Verifier(Rc<dyn CredentialVerifier>);

impl Verifier {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self(Rc::new(verifier))
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(SimulatedVerifier)
    }
}

impl CredentialVerifier for Verifier {
    fn verify(&self, mode: FormMode, credentials: &Credentials) -> Result<(), AuthError> {
        self.0.verify(mode, credentials)
    }
}

/// Validate and submit the form.
///
/// Returns the field errors when validation fails; nothing is notified and no
/// navigation happens in that case. Otherwise exactly one notification is
/// sent, followed by a navigation if the verifier accepted the credentials.
pub fn submit_credentials(
    mode: FormMode,
    input: &CredentialInput,
    verifier: &impl CredentialVerifier,
    notify: &impl Notify,
    navigate: &impl Navigate,
) -> Result<(), FieldErrors> {
    let credentials = Schema::for_mode(mode).validate(input)?;
    tracing::debug!(%mode, email = %credentials.email, "credentials submitted");

    match verifier.verify(mode, &credentials) {
        Ok(()) => {
            notify.notify(Notification::success(mode.success_message()));
            navigate.navigate(mode.success_destination());
        }
        Err(e) => {
            tracing::error!(%mode, "Authentication failed: {}", e);
            notify.notify(Notification::error(format!("There was an error: {e}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_form::mode::Field;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        notifications: RefCell<Vec<Notification>>,
        navigations: RefCell<Vec<Destination>>,
    }

    impl Recorder {
        fn run(&self, mode: FormMode, name: &str, email: &str, password: &str) -> Result<(), FieldErrors> {
            self.run_with(&SimulatedVerifier, mode, name, email, password)
        }

        fn run_with(
            &self,
            verifier: &impl CredentialVerifier,
            mode: FormMode,
            name: &str,
            email: &str,
            password: &str,
        ) -> Result<(), FieldErrors> {
            let input = CredentialInput {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            };
            submit_credentials(
                mode,
                &input,
                verifier,
                &|n: Notification| self.notifications.borrow_mut().push(n),
                &|d: Destination| self.navigations.borrow_mut().push(d),
            )
        }
    }

    struct RejectingVerifier;

    impl CredentialVerifier for RejectingVerifier {
        fn verify(&self, _mode: FormMode, _credentials: &Credentials) -> Result<(), AuthError> {
            Err(AuthError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_sign_in_success() {
        let rec = Recorder::default();
        rec.run(FormMode::SignIn, "", "user@example.com", "secret1").unwrap();

        assert_eq!(
            *rec.notifications.borrow(),
            vec![Notification::success("Welcome back!")]
        );
        assert_eq!(*rec.navigations.borrow(), vec![Destination::Home]);
        assert_eq!(rec.navigations.borrow()[0].path(), "/");
    }

    #[test]
    fn test_sign_up_short_name_blocks_submit() {
        let rec = Recorder::default();
        let errors = rec
            .run(FormMode::SignUp, "Al", "a@b.com", "abcdef")
            .unwrap_err();

        assert!(errors.contains(Field::Name));
        assert!(rec.notifications.borrow().is_empty());
        assert!(rec.navigations.borrow().is_empty());
    }

    #[test]
    fn test_sign_up_success_goes_to_sign_in() {
        let rec = Recorder::default();
        rec.run(FormMode::SignUp, "Alice", "a@b.com", "abcdef").unwrap();

        assert_eq!(
            *rec.notifications.borrow(),
            vec![Notification::success(
                "Account created successfully. Please sign in."
            )]
        );
        assert_eq!(*rec.navigations.borrow(), vec![Destination::SignIn]);
        assert_eq!(rec.navigations.borrow()[0].path(), "/sign-in");
    }

    #[test]
    fn test_invalid_email_blocks_submit_in_both_modes() {
        for mode in [FormMode::SignIn, FormMode::SignUp] {
            let rec = Recorder::default();
            let errors = rec.run(mode, "Alice", "not-an-email", "abcdef").unwrap_err();
            assert!(errors.contains(Field::Email));
            assert!(rec.navigations.borrow().is_empty());
        }
    }

    #[test]
    fn test_sign_in_name_never_blocks() {
        let rec = Recorder::default();
        rec.run(FormMode::SignIn, "x", "user@example.com", "secret1").unwrap();
        assert_eq!(rec.navigations.borrow().len(), 1);
    }

    #[test]
    fn test_verifier_error_notifies_without_navigating() {
        let rec = Recorder::default();
        rec.run_with(&RejectingVerifier, FormMode::SignIn, "", "user@example.com", "secret1")
            .unwrap();

        let notifications = rec.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Error);
        assert_eq!(
            notifications[0].message,
            "There was an error: authentication service unavailable: connection refused"
        );
        assert!(rec.navigations.borrow().is_empty());
    }

    #[test]
    fn test_rejected_credentials_show_reason() {
        struct WrongPassword;

        impl CredentialVerifier for WrongPassword {
            fn verify(&self, _mode: FormMode, _credentials: &Credentials) -> Result<(), AuthError> {
                Err(AuthError::Rejected("bad password".to_string()))
            }
        }

        let rec = Recorder::default();
        rec.run_with(&WrongPassword, FormMode::SignIn, "", "user@example.com", "secret1")
            .unwrap();

        assert_eq!(
            *rec.notifications.borrow(),
            vec![Notification::error("There was an error: bad password")]
        );
        assert!(rec.navigations.borrow().is_empty());
    }

    #[test]
    fn test_resubmit_after_failure() {
        let rec = Recorder::default();
        assert!(rec.run(FormMode::SignUp, "Al", "a@b.com", "abcdef").is_err());
        assert!(rec.run(FormMode::SignUp, "Alice", "a@b.com", "abcdef").is_ok());
        assert_eq!(rec.notifications.borrow().len(), 1);
        assert_eq!(*rec.navigations.borrow(), vec![Destination::SignIn]);
    }

    #[test]
    fn test_default_verifier_is_simulated() {
        let rec = Recorder::default();
        rec.run_with(&Verifier::default(), FormMode::SignUp, "Alice", "a@b.com", "abcdef")
            .unwrap();
        assert_eq!(rec.notifications.borrow()[0].severity, Severity::Success);
    }
}
