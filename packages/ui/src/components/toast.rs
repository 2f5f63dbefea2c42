//! Notification host built on the `dioxus-primitives` toast primitive.

use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Mount once near the root. Everything below it can call [`use_toast`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        toast::ToastProvider {
            {children}
        }
    }
}
