use serde::{Deserialize, Serialize};

use crate::runner::cases::{ExpectedOutcome, TestCase};
use crate::runner::classifier::Outcome;
use crate::utils::config::Config;

/// Verdict for one executed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    /// Actual outcome matched the expectation
    Pass,
    /// Actual outcome (including Unknown) did not match
    Fail,
    /// The case could not be driven to classification
    Error,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Pass => f.write_str("PASS"),
            TestStatus::Fail => f.write_str("FAIL"),
            TestStatus::Error => f.write_str("ERROR"),
        }
    }
}

/// Record of one executed test case. Finalized by the executor and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub username: String,
    /// Masked; the plaintext password never reaches a result or log.
    pub password: String,
    pub expected: ExpectedOutcome,
    /// None when execution errored before classification ran.
    pub actual: Option<Outcome>,
    pub status: TestStatus,
    /// Wall-clock seconds, populated on every branch including Error.
    pub duration: f64,
    pub timestamp: String,
    pub screenshot: Option<String>,
    pub error_message: Option<String>,
}

impl TestResult {
    /// Skeleton result for a case about to run.
    pub fn pending(case: &TestCase) -> Self {
        Self {
            test_name: case.name.clone(),
            username: case.username.clone(),
            password: case.masked_password(),
            expected: case.expected,
            actual: None,
            status: TestStatus::Error,
            duration: 0.0,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            screenshot: None,
            error_message: None,
        }
    }
}

/// Aggregate statistics over a completed result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    /// pass/total x 100; 0 when the result set is empty
    pub success_rate: f64,
    pub total_duration: f64,
    pub average_duration: f64,
}

impl TestSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.status == TestStatus::Pass).count();
        let failed = results.iter().filter(|r| r.status == TestStatus::Fail).count();
        let errors = results.iter().filter(|r| r.status == TestStatus::Error).count();

        let success_rate = if total > 0 {
            passed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let total_duration: f64 = results.iter().map(|r| r.duration).sum();
        let average_duration = if total > 0 {
            total_duration / total as f64
        } else {
            0.0
        };

        Self {
            total,
            passed,
            failed,
            errors,
            success_rate,
            total_duration,
            average_duration,
        }
    }
}

/// Full persisted report: summary, qualitative insights and every result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub generated_at: String,
    pub summary: TestSummary,
    pub insights: Vec<String>,
    pub results: Vec<TestResult>,
}

impl TestReport {
    pub fn from_results(results: Vec<TestResult>, config: &Config) -> Self {
        let summary = TestSummary::from_results(&results);
        let insights = insights_for(&summary, config);

        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            summary,
            insights,
            results,
        }
    }
}

/// Threshold-driven insight strings. The thresholds live in `Config`.
fn insights_for(summary: &TestSummary, config: &Config) -> Vec<String> {
    if summary.total == 0 {
        return vec!["No test cases were executed.".to_string()];
    }

    let mut insights = Vec::new();

    if summary.passed == summary.total {
        insights.push("All tests passed. Login functionality is working correctly.".to_string());
    } else if summary.success_rate >= config.acceptable_rate {
        insights.push("Most tests passed, but some edge cases need attention.".to_string());
    } else {
        insights.push("Multiple failures detected. Critical issues require immediate fix.".to_string());
    }

    if summary.average_duration > config.slow_average_secs {
        insights.push("Page load times are slow. Consider performance optimization.".to_string());
    } else {
        insights.push("Page response times are within acceptable range.".to_string());
    }

    insights
}
