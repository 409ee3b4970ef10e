//! Shared UI components for the Aurora applications.
//!
//! Provides the logo, the splash and home screen content, and the stylesheet
//! shared between the desktop/mobile shell and the web shell.

pub mod assets;
pub mod home;
pub mod logo;
pub mod splash;

pub use assets::logo_data_url;
pub use home::{HomeView, WELCOME_MESSAGE};
pub use logo::Logo;
pub use splash::SplashView;

/// Shared CSS containing design tokens and the screen styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
