//! Heuristic login outcome classification from page state.
//!
//! Signals are an ordered rule set: success signals are checked first,
//! first match wins, then failure signals. Neither firing is a valid
//! result (`Unknown`), not a fault. A driver error while evaluating one
//! signal degrades that signal to "not detected" so classification can
//! never abort a test case.

use serde::{Deserialize, Serialize};

use crate::driver::traits::{BrowserDriver, Selector};

/// What the page state says happened after submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
    Unknown,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::Failure => f.write_str("failure"),
            Outcome::Unknown => f.write_str("unknown"),
        }
    }
}

/// A single ordered indicator that login went through.
#[derive(Debug, Clone)]
pub enum SuccessSignal {
    /// Resulting URL contains a marker substring
    UrlContains(String),
    /// A designated element's text contains a phrase (case-insensitive)
    ElementTextContains { selector: Selector, phrase: String },
    /// A control that only exists once logged in is present
    ElementPresent(Selector),
}

impl SuccessSignal {
    async fn detected(&self, driver: &dyn BrowserDriver) -> bool {
        match self {
            SuccessSignal::UrlContains(marker) => driver
                .current_url()
                .await
                .map(|url| url.contains(marker))
                .unwrap_or(false),
            SuccessSignal::ElementTextContains { selector, phrase } => driver
                .element_text(selector)
                .await
                .map(|text| text.to_lowercase().contains(&phrase.to_lowercase()))
                .unwrap_or(false),
            SuccessSignal::ElementPresent(selector) => {
                driver.is_present(selector).await.unwrap_or(false)
            }
        }
    }
}

/// A single indicator that login was rejected.
#[derive(Debug, Clone)]
pub enum FailureSignal {
    /// A designated error element is visible
    ElementVisible(Selector),
    /// At least one visibly rendered element carries an error-styling class
    AnyVisibleClass(String),
}

impl FailureSignal {
    async fn detected(&self, driver: &dyn BrowserDriver) -> bool {
        match self {
            FailureSignal::ElementVisible(selector) => {
                driver.is_visible(selector).await.unwrap_or(false)
            }
            FailureSignal::AnyVisibleClass(class) => driver
                .has_visible(&Selector::class_name(class))
                .await
                .unwrap_or(false),
        }
    }
}

/// Ordered, explicitly configured classification rules.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    pub success: Vec<SuccessSignal>,
    pub failure: Vec<FailureSignal>,
}

impl Default for ClassifierRules {
    /// Rules matching the reference practice login page.
    fn default() -> Self {
        Self {
            success: vec![
                SuccessSignal::UrlContains("logged-in-successfully".to_string()),
                SuccessSignal::UrlContains("dashboard".to_string()),
                SuccessSignal::ElementTextContains {
                    selector: Selector::class_name("post-title"),
                    phrase: "successfully".to_string(),
                },
                SuccessSignal::ElementPresent(Selector::link_text("Log out")),
            ],
            failure: vec![
                FailureSignal::ElementVisible(Selector::id("error")),
                FailureSignal::AnyVisibleClass("error".to_string()),
                FailureSignal::AnyVisibleClass("alert-error".to_string()),
                FailureSignal::AnyVisibleClass("login-error".to_string()),
            ],
        }
    }
}

impl ClassifierRules {
    /// Classify the current page state. Never fails.
    pub async fn classify(&self, driver: &dyn BrowserDriver) -> Outcome {
        for signal in &self.success {
            if signal.detected(driver).await {
                return Outcome::Success;
            }
        }
        for signal in &self.failure {
            if signal.detected(driver).await {
                return Outcome::Failure;
            }
        }
        Outcome::Unknown
    }
}
