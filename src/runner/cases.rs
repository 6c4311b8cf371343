//! Test case table for the login suite.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::classifier::Outcome;

/// Outcome a test case expects from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedOutcome {
    Success,
    Failure,
}

impl ExpectedOutcome {
    /// An `Unknown` actual never matches either expectation; the
    /// Pass/Fail comparison falls out of that without special-casing.
    pub fn matches(self, actual: Outcome) -> bool {
        matches!(
            (self, actual),
            (ExpectedOutcome::Success, Outcome::Success)
                | (ExpectedOutcome::Failure, Outcome::Failure)
        )
    }
}

impl std::fmt::Display for ExpectedOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedOutcome::Success => f.write_str("success"),
            ExpectedOutcome::Failure => f.write_str("failure"),
        }
    }
}

/// One credential scenario to drive through the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub username: String,
    pub password: String,
    pub expected: ExpectedOutcome,
}

impl TestCase {
    pub fn new(name: &str, username: &str, password: &str, expected: ExpectedOutcome) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            expected,
        }
    }

    /// Password as it may appear in results and logs.
    pub fn masked_password(&self) -> String {
        if self.password.is_empty() {
            String::new()
        } else {
            "****".to_string()
        }
    }
}

/// The built-in suite against the reference practice login page.
pub fn default_cases() -> Vec<TestCase> {
    use ExpectedOutcome::{Failure, Success};

    vec![
        TestCase::new("Valid Login", "student", "Password123", Success),
        TestCase::new("Invalid Username", "invaliduser", "Password123", Failure),
        TestCase::new("Invalid Password", "student", "wrongpassword", Failure),
        TestCase::new("Invalid Credentials", "wronguser", "wrongpass", Failure),
        TestCase::new("Empty Username", "", "Password123", Failure),
        TestCase::new("Empty Password", "student", "", Failure),
        TestCase::new("Empty Credentials", "", "", Failure),
        TestCase::new("SQL Injection Attempt", "admin' OR '1'='1", "password", Failure),
        TestCase::new("XSS Attempt", "<script>alert('XSS')</script>", "password", Failure),
    ]
}

/// Load a case table from a JSON file (array of `TestCase` objects).
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cases file: {}", path.display()))?;
    let cases: Vec<TestCase> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid cases file: {}", path.display()))?;
    if cases.is_empty() {
        anyhow::bail!("Cases file is empty: {}", path.display());
    }
    Ok(cases)
}
