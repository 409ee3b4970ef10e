//! Named routes and their web path mapping.

use std::fmt;

/// The screens of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Transient initial screen.
    #[default]
    Splash,
    /// Terminal screen, no further transitions.
    Home,
}

impl Route {
    /// Returns the display name for the route.
    pub fn display_name(&self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::Home => "Home",
        }
    }

    /// Returns the browser path for the route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Splash => "/",
            Route::Home => "/home",
        }
    }

    /// Looks up the route registered for a browser path.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::all().iter().copied().find(|r| r.path() == path)
    }

    /// Whether the flow ends here.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Returns all routes.
    pub fn all() -> &'static [Route] {
        &[Route::Splash, Route::Home]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
