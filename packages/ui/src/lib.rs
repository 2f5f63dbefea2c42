//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod config;
pub use config::{use_app_config, AppConfig};

mod shell;
pub use shell::AppShell;

mod header;
pub use header::Header;

pub mod auth_form;
pub use auth_form::{AuthForm, Destination, FormMode};

pub mod views;
