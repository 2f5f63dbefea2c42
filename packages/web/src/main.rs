use dioxus::prelude::*;

use ui::Destination;
use views::{AuthLayout, Home, RootLayout, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(RootLayout)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[layout(AuthLayout)]
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-up")]
        SignUp {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::SignIn => Route::SignIn {},
            Destination::SignUp => Route::SignUp {},
        }
    }
}

#[cfg(feature = "server")]
fn main() -> std::io::Result<()> {
    tokio::runtime::Runtime::new()?.block_on(launch_server())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
async fn launch_server() -> std::io::Result<()> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    // RUST_LOG wins over the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    // Server-side render the application and serve its assets
    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await
}

#[component]
fn App() -> Element {
    rsx! {
        ui::AppShell {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_destinations() {
        for destination in [Destination::Home, Destination::SignIn, Destination::SignUp] {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_auth_paths_parse() {
        assert_eq!("/sign-in".parse::<Route>().ok(), Some(Route::SignIn {}));
        assert_eq!("/sign-up".parse::<Route>().ok(), Some(Route::SignUp {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
    }
}
