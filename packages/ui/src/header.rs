use dioxus::prelude::*;

use crate::config::use_app_config;
use crate::icons::FaRobot;
use crate::Icon;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Persistent header shown above the signed-in section of the app.
#[component]
pub fn Header() -> Element {
    let config = use_app_config();

    rsx! {
        document::Stylesheet { href: HEADER_CSS }
        header {
            class: "header",
            Link {
                class: "header-brand",
                to: "/",
                Icon { icon: FaRobot, width: 20, height: 20 }
                span { "{config.site.title}" }
            }
        }
    }
}
