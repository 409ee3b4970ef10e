//! Root shell component: renders whatever is on top of the route stack.

use dioxus::prelude::*;

use aurora_navigation::{Route, RouteStack};

use crate::options;
use crate::state::NavContext;

/// Root application component.
#[component]
pub fn App() -> Element {
    let initial = if options::launch_options().skip_splash {
        RouteStack::with_initial(Route::Home)
    } else {
        RouteStack::new()
    };
    let stack = use_signal_sync(move || initial);

    let nav = use_context_provider(|| NavContext { stack });

    use_drop(|| {
        tracing::info!("shutting down Aurora shell");
    });

    match nav.current() {
        Route::Splash => rsx! {
            super::splash::SplashScreen {}
        },
        Route::Home => rsx! {
            super::home::HomeScreen {}
        },
    }
}
