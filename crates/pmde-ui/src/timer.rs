//! Platform timers.
//!
//! Native builds run on the desktop renderer's tokio runtime; browser builds
//! use `setTimeout` through gloo.

use std::time::Duration;

/// Sleep for `ms` milliseconds on the current platform's event loop.
pub async fn sleep_ms(ms: u64) {
    let duration = Duration::from_millis(ms);

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo::timers::future::sleep(duration).await;
}

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_duration() {
        let start = tokio::time::Instant::now();
        sleep_ms(300).await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[test]
    fn clock_is_after_2024() {
        assert!(now_ms() > 1_704_067_200_000);
    }
}
