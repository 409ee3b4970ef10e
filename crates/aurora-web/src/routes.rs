//! Browser routes and screens.

use dioxus::prelude::*;

use aurora_navigation::{Route, SPLASH_DELAY};
use aurora_ui::{HomeView, SHARED_CSS, SplashView};

use crate::time;

/// Browser route table. Paths mirror [`Route`]'s web mapping.
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum WebRoute {
    /// Initial route.
    #[route("/")]
    Splash {},
    /// Terminal route.
    #[route("/home")]
    Home {},
}

impl From<WebRoute> for Route {
    fn from(route: WebRoute) -> Self {
        match route {
            WebRoute::Splash {} => Route::Splash,
            WebRoute::Home {} => Route::Home,
        }
    }
}

/// Root component: shared styles plus the router.
#[component]
pub fn Root() -> Element {
    rsx! {
        style { {SHARED_CSS} }
        Router::<WebRoute> {}
    }
}

/// Splash screen: schedules the one-shot replace to `/home`.
///
/// The task is owned by the component, so navigating away or unmounting
/// before the delay elapses drops it and nothing fires afterwards.
#[component]
fn Splash() -> Element {
    let nav = navigator();

    let _splash_task = use_future(move || async move {
        time::sleep(SPLASH_DELAY).await;
        tracing::info!(to = Route::Home.path(), "replace navigation");
        nav.replace(WebRoute::Home {});
    });

    rsx! {
        SplashView {}
    }
}

/// Home screen: static content, no further transitions.
#[component]
fn Home() -> Element {
    rsx! {
        HomeView {}
    }
}
