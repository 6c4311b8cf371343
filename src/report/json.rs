use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::types::TestReport;

/// Persist a report as pretty-printed JSON.
///
/// The filename carries a generation timestamp so repeated runs into
/// the same output directory never collide.
pub fn write_report(report: &TestReport, output_dir: &Path) -> Result<PathBuf> {
    let filename = format!("test_report_{}.json", chrono::Utc::now().timestamp());
    let path = output_dir.join(filename);

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    Ok(path)
}

/// Load a previously persisted report.
pub fn read_report(path: &Path) -> Result<TestReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report: {}", path.display()))?;
    let report = serde_json::from_str(&content)
        .with_context(|| format!("Invalid report file: {}", path.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::TestResult;
    use crate::runner::cases::{ExpectedOutcome, TestCase};
    use crate::utils::config::Config;

    #[test]
    fn test_report_round_trip() {
        let case = TestCase::new("Valid Login", "student", "Password123", ExpectedOutcome::Success);
        let report = TestReport::from_results(vec![TestResult::pending(&case)], &Config::default());

        let dir = std::env::temp_dir().join(format!("login_tester_report_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = write_report(&report, &dir).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("test_report_"));

        let loaded = read_report(&path).unwrap();
        assert_eq!(loaded.summary.total, 1);
        assert_eq!(loaded.results[0].test_name, "Valid Login");
        assert_eq!(loaded.results[0].password, "****");

        std::fs::remove_dir_all(&dir).ok();
    }
}
