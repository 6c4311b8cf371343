//! Drives one login test case end to end.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::cases::TestCase;
use super::classifier::{ClassifierRules, Outcome};
use super::locator;
use crate::driver::traits::{BrowserDriver, Selector};
use crate::error::HarnessError;
use crate::report::types::{TestResult, TestStatus};
use crate::utils::config::Config;

/// Executes single test cases against one shared browser session.
///
/// Every failure between navigation and classification is contained
/// here and downgraded to an `Error` result, so a broken case can never
/// abort the suite. Each case re-navigates to the login page first,
/// which also resets any state a previous case left behind.
pub struct LoginExecutor<'a> {
    driver: &'a dyn BrowserDriver,
    rules: &'a ClassifierRules,
    config: &'a Config,
    login_url: &'a str,
    output_dir: &'a Path,
}

impl<'a> LoginExecutor<'a> {
    pub fn new(
        driver: &'a dyn BrowserDriver,
        rules: &'a ClassifierRules,
        config: &'a Config,
        login_url: &'a str,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            driver,
            rules,
            config,
            login_url,
            output_dir,
        }
    }

    /// Run one case and finalize its result.
    pub async fn execute(&self, case: &TestCase) -> TestResult {
        println!("\n{} TEST: {}", "🧪".cyan(), case.name.bold());

        let started = Instant::now();
        let mut result = TestResult::pending(case);

        match self.drive(case).await {
            Ok(actual) => {
                result.actual = Some(actual);
                if case.expected.matches(actual) {
                    result.status = TestStatus::Pass;
                    println!(
                        "{} TEST PASSED: got expected result '{}'",
                        "✅".green(),
                        case.expected
                    );
                } else {
                    result.status = TestStatus::Fail;
                    let message = format!("Expected {}, got {}", case.expected, actual);
                    println!("{} TEST FAILED: {}", "❌".red(), message);
                    result.error_message = Some(message);
                }
            }
            Err(e) => {
                result.status = TestStatus::Error;
                result.error_message = Some(format!("{:#}", e));
                println!("{} TEST ERROR: {:#}", "⚠️".yellow(), e);
            }
        }

        // Screenshot is captured unconditionally, also for Error results,
        // so every case leaves a visual trace for diagnosis.
        result.screenshot = self.capture_screenshot(case).await;

        result.duration = started.elapsed().as_secs_f64();
        println!("{} Duration: {:.2}s", "⏱".blue(), result.duration);

        result
    }

    /// Steps 1-6: navigate, locate, fill, submit, settle, classify.
    async fn drive(&self, case: &TestCase) -> Result<Outcome> {
        self.driver
            .goto(self.login_url)
            .await
            .map_err(|e| HarnessError::Navigation {
                url: self.login_url.to_string(),
                reason: format!("{:#}", e),
            })?;

        let username_field = self.locate(Selector::id("username"), "username field").await?;
        let password_field = self.locate(Selector::id("password"), "password field").await?;
        let submit_button = self.locate(Selector::id("submit"), "submit button").await?;

        println!("{} Entering username: {}", "⌨".blue(), case.username);
        self.driver
            .clear_and_fill(&username_field, &case.username)
            .await?;

        println!(
            "{} Entering password: {}",
            "⌨".blue(),
            "*".repeat(case.password.len())
        );
        self.driver
            .clear_and_fill(&password_field, &case.password)
            .await?;

        println!("{} Submitting form...", "🖱".blue());
        self.driver.click(&submit_button).await?;

        Ok(self.settle().await)
    }

    /// Locate a required control, or fail naming it.
    async fn locate(&self, selector: Selector, control: &str) -> Result<Selector> {
        log::debug!("locating {} ({})", control, selector);
        let found = locator::wait_for(
            self.driver,
            &selector,
            self.config.element_timeout_ms,
            self.config,
        )
        .await?;

        if found {
            Ok(selector)
        } else {
            Err(HarnessError::ElementNotFound(control.to_string()).into())
        }
    }

    /// Post-submit wait: a bounded poll on the classifier instead of a
    /// blind sleep. Returns as soon as a signal fires; when none ever
    /// does, the budget elapses and the last classification (Unknown)
    /// stands.
    async fn settle(&self) -> Outcome {
        let deadline = Instant::now() + Duration::from_millis(self.config.settle_budget_ms);

        loop {
            let outcome = self.rules.classify(self.driver).await;
            if outcome != Outcome::Unknown || Instant::now() >= deadline {
                return outcome;
            }
            tokio::time::sleep(Duration::from_millis(self.config.settle_poll_ms)).await;
        }
    }

    async fn capture_screenshot(&self, case: &TestCase) -> Option<String> {
        let filename = format!(
            "test_{}_{}.png",
            case.name.replace(' ', "_"),
            chrono::Utc::now().timestamp()
        );
        let path: PathBuf = self.output_dir.join(&filename);

        match self.driver.take_screenshot(&path).await {
            Ok(()) => {
                println!("{} Screenshot saved: {}", "📸".blue(), path.display());
                Some(path.display().to_string())
            }
            Err(e) => {
                log::warn!("screenshot capture failed for '{}': {:#}", case.name, e);
                None
            }
        }
    }
}
