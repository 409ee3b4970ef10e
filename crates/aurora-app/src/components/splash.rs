//! Splash screen: shows the logo and schedules the one-shot replace to home.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use aurora_navigation::{Route, SplashDelay};
use aurora_ui::SplashView;

use crate::options;
use crate::state::NavContext;

/// Splash screen component.
///
/// The delay guard is owned by the component's hook state, so unmounting
/// before expiry drops it and aborts the pending navigation.
#[component]
pub fn SplashScreen() -> Element {
    let nav = use_context::<NavContext>();

    use_hook(|| {
        let delay = Duration::from_millis(options::launch_options().splash_millis);
        Rc::new(SplashDelay::schedule(delay, move || {
            let mut nav = nav;
            nav.replace(Route::Home);
        }))
    });

    rsx! {
        SplashView {}
    }
}
