mod auth_layout;
pub use auth_layout::AuthLayoutView;

mod root_layout;
pub use root_layout::RootLayoutView;

mod home;
pub use home::HomeView;
