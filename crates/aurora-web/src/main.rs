//! Entry point for the Aurora web shell.

use aurora_web::Root;

fn main() {
    // A fmt subscriber cannot write to stdout under wasm; the framework's
    // logger bridges tracing to the browser console.
    dioxus::logger::initialize_default();

    tracing::info!("Starting Aurora web");

    dioxus::launch(Root);
}
