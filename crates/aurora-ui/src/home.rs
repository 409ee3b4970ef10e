//! Home screen content.

use dioxus::prelude::*;

use crate::logo::Logo;

/// Welcome copy shown on the home screen.
pub const WELCOME_MESSAGE: &str = "Welcome to the Home Page!";

/// Static home content: the logo and a welcome heading. No inputs, no
/// state, no side effects.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "home-screen",
            Logo {}
            h1 { class: "home-title", "{WELCOME_MESSAGE}" }
        }
    }
}
