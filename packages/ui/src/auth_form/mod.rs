//! Sign-in / sign-up form: modes, validation, submission and the component.

mod component;
mod field;
pub mod mode;
pub mod schema;
pub mod submit;

pub use component::AuthForm;
pub use field::FormField;
pub use mode::{Destination, Field, FormMode};
pub use schema::{CredentialInput, Credentials, FieldErrors, Schema};
pub use submit::{
    submit_credentials, AuthError, CredentialVerifier, Navigate, Notification, Notify, Severity,
    SimulatedVerifier, Verifier,
};
