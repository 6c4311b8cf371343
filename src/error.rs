use thiserror::Error;

/// Failures the harness distinguishes between.
///
/// Only `SessionInit` is fatal to a whole suite run. `Navigation` and
/// `ElementNotFound` are contained at the executor boundary and turned
/// into a `TestResult` with `Error` status. An ambiguous login outcome
/// is not an error at all - it is recorded as `Outcome::Unknown`.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The browser-automation driver or browser failed to start.
    #[error("browser session failed to start: {0}")]
    SessionInit(String),

    /// The login page failed to load for one test case.
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    /// A required control was missing within the element timeout.
    /// The string names the control ("username field", "submit button", ...).
    #[error("{0} not found within timeout")]
    ElementNotFound(String),
}
