//! Application logo.

use dioxus::prelude::*;

use crate::assets::logo_data_url;

/// Logo image sized for the splash and home screens.
#[component]
pub fn Logo(#[props(default = 200)] size: u32) -> Element {
    let src = logo_data_url();

    rsx! {
        img {
            class: "app-logo",
            src: "{src}",
            alt: "Logo",
            width: "{size}",
            height: "{size}",
        }
    }
}
