//! Sleep shim for the browser.

use std::time::Duration;

// `tokio::time::sleep` has no timer driver on `wasm32-unknown-unknown`;
// `gloo-timers` schedules through `setTimeout` instead.

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
