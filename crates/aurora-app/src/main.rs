//! Entry point for the Aurora desktop/mobile shell.

use clap::Parser;

use aurora_app::components::App;
use aurora_app::options::{self, LaunchOptions};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "aurora-app")]
#[command(about = "Aurora splash/home shell")]
struct Args {
    /// Splash duration in milliseconds before home replaces it
    #[arg(long, default_value_t = aurora_navigation::SPLASH_DELAY_MS)]
    splash_millis: u64,

    /// Open directly on the home screen
    #[arg(long)]
    skip_splash: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Aurora");

    let args = Args::parse();
    options::set_launch_options(LaunchOptions {
        splash_millis: args.splash_millis,
        skip_splash: args.skip_splash,
    });

    launch_app();
}

#[cfg(feature = "desktop")]
fn launch_app() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Aurora")
                        .with_inner_size(LogicalSize::new(420, 780)),
                )
                .with_custom_head(format!("<style>{}</style>", aurora_ui::SHARED_CSS)),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch_app() {
    // Mobile build: the platform supplies the window and lifecycle.
    dioxus::launch(App);
}
