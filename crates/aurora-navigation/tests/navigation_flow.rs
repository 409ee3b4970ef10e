//! End-to-end navigation flow under a paused clock.
//!
//! These tests drive the same state the shells render: a shared
//! [`RouteStack`] written by the scheduled splash transition.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_test::assert_ok;

use aurora_navigation::{Route, RouteStack, SPLASH_DELAY, SplashDelay};

fn shared_stack() -> Arc<Mutex<RouteStack>> {
    Arc::new(Mutex::new(RouteStack::new()))
}

fn schedule_replace(stack: &Arc<Mutex<RouteStack>>, delay: Duration) -> SplashDelay {
    let stack = Arc::clone(stack);
    SplashDelay::schedule(delay, move || {
        stack.lock().unwrap().replace(Route::Home);
    })
}

#[tokio::test(start_paused = true)]
async fn splash_reaches_home_after_configured_delay() {
    let stack = shared_stack();
    let _guard = schedule_replace(&stack, SPLASH_DELAY);

    tokio::time::advance(SPLASH_DELAY).await;
    tokio::task::yield_now().await;

    let stack = stack.lock().unwrap();
    assert_eq!(stack.current(), Route::Home);
    assert_eq!(stack.depth(), 1);
    assert!(!stack.can_go_back());
}

#[tokio::test(start_paused = true)]
async fn splash_does_not_navigate_early() {
    let stack = shared_stack();
    let _guard = schedule_replace(&stack, SPLASH_DELAY);

    tokio::time::advance(Duration::from_millis(4999)).await;
    tokio::task::yield_now().await;

    assert_eq!(stack.lock().unwrap().current(), Route::Splash);
}

#[tokio::test(start_paused = true)]
async fn unmounting_splash_cancels_the_transition() {
    let stack = shared_stack();
    let guard = schedule_replace(&stack, SPLASH_DELAY);

    tokio::time::advance(Duration::from_millis(2000)).await;
    drop(guard);

    tokio::time::advance(Duration::from_millis(4000)).await;
    tokio::task::yield_now().await;

    assert_eq!(stack.lock().unwrap().current(), Route::Splash);
}

#[tokio::test(start_paused = true)]
async fn transition_happens_at_most_once() {
    let stack = shared_stack();
    let guard = schedule_replace(&stack, SPLASH_DELAY);

    tokio::time::advance(SPLASH_DELAY).await;
    tokio::task::yield_now().await;
    tokio::time::advance(SPLASH_DELAY).await;
    tokio::task::yield_now().await;

    assert!(guard.has_fired());
    let stack = stack.lock().unwrap();
    assert_eq!(stack.current(), Route::Home);
    assert_eq!(stack.depth(), 1);
}

#[tokio::test(start_paused = true)]
async fn home_survives_manual_back_navigation_attempts() {
    let stack = shared_stack();
    let _guard = schedule_replace(&stack, SPLASH_DELAY);

    tokio::time::advance(SPLASH_DELAY).await;
    tokio::task::yield_now().await;

    let mut stack = stack.lock().unwrap();
    assert_eq!(stack.pop(), Err(aurora_navigation::NavigationError::AtRoot));

    // Pushing and popping a hypothetical later screen still lands on home.
    stack.push(Route::Home);
    assert_ok!(stack.pop());
    assert_eq!(stack.current(), Route::Home);
}
