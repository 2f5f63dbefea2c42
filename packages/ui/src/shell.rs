//! Root document shell: metadata, fonts, global styles and the toast host.

use dioxus::prelude::*;

use crate::components::ToastProvider;
use crate::config::AppConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

/// Wrap the router with this component. It provides [`AppConfig`] through
/// the context and mounts the single notification host for the whole app.
#[component]
pub fn AppShell(children: Element) -> Element {
    let config = use_context_provider(AppConfig::load);
    let font_href = config.font.stylesheet_url();
    let font_family = config.font.css_family();
    let lang_script = config.site.lang_script();

    use_effect(move || {
        let _ = document::eval(&lang_script);
    });

    rsx! {
        document::Title { "{config.site.title}" }
        document::Meta { name: "description", content: "{config.site.description}" }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        document::Link { rel: "stylesheet", href: "{font_href}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }

        div {
            class: "app-shell antialiased",
            style: "font-family: {font_family};",
            ToastProvider {
                {children}
            }
        }
    }
}
