//! # Aurora Navigation
//!
//! Screen navigation model for the Aurora applications.
//!
//! Both the desktop/mobile shell and the web shell drive the same two-screen
//! flow: the app opens on [`Route::Splash`], a one-shot delay elapses, and
//! the splash entry is replaced by [`Route::Home`] so it cannot be reached
//! again via back navigation.
//!
//! ## Core Components
//!
//! - [`Route`]: the named routes and their web path mapping
//! - [`RouteStack`]: navigation history with push/pop/replace semantics
//! - [`SplashDelay`]: the scheduled splash transition, aborted when dropped

use std::time::Duration;

pub mod route;
#[cfg(not(target_arch = "wasm32"))]
pub mod splash;
pub mod stack;

pub use route::Route;
#[cfg(not(target_arch = "wasm32"))]
pub use splash::SplashDelay;
pub use stack::{NavigationError, RouteStack};

/// How long the splash screen stays up before home replaces it.
pub const SPLASH_DELAY_MS: u64 = 5000;

/// [`SPLASH_DELAY_MS`] as a [`Duration`].
pub const SPLASH_DELAY: Duration = Duration::from_millis(SPLASH_DELAY_MS);
