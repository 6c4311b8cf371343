/// Harness tuning constants.
///
/// These are configuration values, never derived at runtime. The report
/// thresholds drive the qualitative insight messages.
pub struct Config {
    /// Timeout for locating a required control (ms)
    pub element_timeout_ms: u64,

    /// Poll interval inside the element locator (ms)
    pub locator_poll_ms: u64,

    /// Budget for the post-submit settle poll (ms)
    pub settle_budget_ms: u64,

    /// Poll interval for the post-submit settle poll (ms)
    pub settle_poll_ms: u64,

    /// Pause between test cases, as light rate-limiting (ms)
    pub case_pause_ms: u64,

    /// Success rate considered an acceptable run (percent)
    pub acceptable_rate: f64,

    /// Average case duration above which the report flags slowness (s)
    pub slow_average_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            element_timeout_ms: 10_000,
            locator_poll_ms: 200,
            settle_budget_ms: 2_000,
            settle_poll_ms: 250,
            case_pause_ms: 1_000,
            acceptable_rate: 80.0,
            slow_average_secs: 5.0,
        }
    }
}
