//! Home screen: static content, no further transitions.

use dioxus::prelude::*;

use aurora_ui::HomeView;

/// Home screen component.
#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        HomeView {}
    }
}
