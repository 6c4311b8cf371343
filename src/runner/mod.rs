pub mod cases;
pub mod classifier;
pub mod executor;
pub mod locator;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::driver::traits::BrowserDriver;
use crate::driver::web::{WebDriver, WebDriverConfig};
use crate::report;
use crate::report::types::{TestReport, TestResult};
use crate::utils::config::Config;
use cases::TestCase;
use classifier::ClassifierRules;
use executor::LoginExecutor;

/// Run every case in table order against one shared session.
///
/// Strictly sequential; a prior case's failure never skips a later
/// case, and each case yields exactly one result, in submission order.
pub async fn run_suite(
    driver: &dyn BrowserDriver,
    test_cases: &[TestCase],
    rules: &ClassifierRules,
    config: &Config,
    login_url: &str,
    output_dir: &Path,
) -> Vec<TestResult> {
    let executor = LoginExecutor::new(driver, rules, config, login_url, output_dir);
    let mut results = Vec::with_capacity(test_cases.len());

    for (index, case) in test_cases.iter().enumerate() {
        results.push(executor.execute(case).await);

        // Light rate-limiting against the target, not correctness-critical.
        if index + 1 < test_cases.len() {
            tokio::time::sleep(Duration::from_millis(config.case_pause_ms)).await;
        }
    }

    results
}

/// Options for a full suite run, from the CLI.
pub struct RunOptions {
    pub login_url: String,
    pub output_dir: PathBuf,
    pub headless: bool,
    pub cases_file: Option<PathBuf>,
}

/// End-to-end entry point: open a session, run the suite, report.
///
/// Only session startup is fatal. The browser is owned by this scope
/// and released on drop, so it cannot leak on any exit path, report
/// failures included.
pub async fn run_login_tests(options: RunOptions) -> Result<()> {
    let test_cases = match options.cases_file {
        Some(ref path) => cases::load_cases(path)?,
        None => cases::default_cases(),
    };

    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.output_dir.display()
        )
    })?;

    println!(
        "{} Starting login test suite: {} case(s) against {}",
        "🚀".green().bold(),
        test_cases.len(),
        options.login_url.cyan()
    );

    let config = Config::default();
    let rules = ClassifierRules::default();

    let driver_config = WebDriverConfig {
        headless: options.headless,
        ..WebDriverConfig::default()
    };
    let driver = WebDriver::new(driver_config).await?;

    let results = run_suite(
        &driver,
        &test_cases,
        &rules,
        &config,
        &options.login_url,
        &options.output_dir,
    )
    .await;

    // Suite is done with the session; release the browser before any
    // report I/O so a write failure cannot delay teardown.
    if let Err(e) = driver.reset().await {
        log::warn!("session reset before teardown failed: {:#}", e);
    }
    drop(driver);

    let report = TestReport::from_results(results, &config);
    report::print_report(&report);

    let path = report::json::write_report(&report, &options.output_dir)?;
    println!("\n{} Report saved to: {}", "💾".blue(), path.display());

    Ok(())
}
