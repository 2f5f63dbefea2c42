mod auth_layout;
pub use auth_layout::AuthLayout;

mod root_layout;
pub use root_layout::RootLayout;

mod home;
pub use home::Home;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;
