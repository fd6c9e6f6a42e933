#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

/// Suspends the current task for `ms` milliseconds.
///
/// Timers only exist in the browser; on other targets the future resolves
/// immediately and periodic loops are not started.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    let _ = ms;
}

/// Whether periodic tasks can be scheduled on this target.
pub const fn periodic_supported() -> bool {
    cfg!(target_arch = "wasm32")
}
