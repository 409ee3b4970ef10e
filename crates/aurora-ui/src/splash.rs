//! Splash screen content.

use dioxus::prelude::*;

use crate::logo::Logo;

/// Static splash content: the logo centered on a plain background.
///
/// Timing and navigation live in the shells; this view has no state.
#[component]
pub fn SplashView() -> Element {
    rsx! {
        div { class: "splash-screen",
            Logo {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_logo_and_no_heading() {
        let html = dioxus_ssr::render_element(rsx! { SplashView {} });

        assert_eq!(html.matches("<img").count(), 1);
        assert!(!html.contains("<h1"));
    }
}
