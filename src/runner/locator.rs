//! Bounded-wait element lookup.

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::driver::traits::{BrowserDriver, Selector};
use crate::utils::config::Config;

/// Poll the DOM until `selector` is present or the timeout elapses.
///
/// Timing out is an expected outcome, so this returns `Ok(false)`
/// rather than an error and lets callers branch. This bounded poll is
/// the only retry-like behavior in the harness.
pub async fn wait_for(
    driver: &dyn BrowserDriver,
    selector: &Selector,
    timeout_ms: u64,
    config: &Config,
) -> Result<bool> {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);

    loop {
        if driver.is_present(selector).await? {
            return Ok(true);
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
        tokio::time::sleep(Duration::from_millis(config.locator_poll_ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::fake::{FakeDriver, PageState};

    #[tokio::test]
    async fn test_finds_present_element_immediately() {
        let driver = FakeDriver::new(PageState::login_form("https://example.test/login"));
        let config = Config::default();
        let found = wait_for(&driver, &Selector::id("username"), 1_000, &config)
            .await
            .unwrap();
        assert!(found);
    }

    #[tokio::test]
    async fn test_returns_false_on_timeout_instead_of_error() {
        let driver = FakeDriver::new(PageState::new("https://example.test/login"));
        let config = Config {
            locator_poll_ms: 10,
            ..Config::default()
        };
        let start = std::time::Instant::now();
        let found = wait_for(&driver, &Selector::id("missing"), 50, &config)
            .await
            .unwrap();
        assert!(!found);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_zero_timeout_still_checks_once() {
        let driver = FakeDriver::new(PageState::login_form("https://example.test/login"));
        let config = Config::default();
        let found = wait_for(&driver, &Selector::id("submit"), 0, &config)
            .await
            .unwrap();
        assert!(found);
    }
}
