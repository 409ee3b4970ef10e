//! Launch options resolved from the command line.

use std::sync::OnceLock;

use aurora_navigation::SPLASH_DELAY_MS;

/// Options the binary resolves before launching the UI.
#[derive(Clone, Copy, Debug)]
pub struct LaunchOptions {
    /// Splash duration in milliseconds.
    pub splash_millis: u64,
    /// Open directly on the home screen.
    pub skip_splash: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            splash_millis: SPLASH_DELAY_MS,
            skip_splash: false,
        }
    }
}

/// Global storage for the parsed options.
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// Stores the options parsed by the binary. Later calls are ignored.
pub fn set_launch_options(options: LaunchOptions) {
    LAUNCH_OPTIONS.set(options).ok();
}

/// Returns the stored options, or defaults when none were set.
pub fn launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_fixed_delay() {
        let options = LaunchOptions::default();
        assert_eq!(options.splash_millis, 5000);
        assert!(!options.skip_splash);
    }
}
