//! Navigation state shared through Dioxus context.

use dioxus::prelude::*;

use aurora_navigation::{Route, RouteStack};

/// Shared navigation context.
///
/// The stack lives in a sync signal so the splash timer task can write it
/// from outside the UI scheduler.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub stack: SyncSignal<RouteStack>,
}

impl NavContext {
    /// The route currently on top of the stack.
    pub fn current(&self) -> Route {
        self.stack.read().current()
    }

    /// Replaces the visible screen, dropping it from history.
    pub fn replace(&mut self, route: Route) {
        let replaced = self.stack.write().replace(route);
        tracing::info!(from = %replaced, to = %route, "replace navigation");
    }
}
