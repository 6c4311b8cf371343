pub mod json;
pub mod types;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use types::{TestReport, TestStatus};

/// Re-render a persisted report to the console.
pub async fn generate_report(results_path: &Path) -> Result<()> {
    let report = json::read_report(results_path)?;
    print_report(&report);
    Ok(())
}

/// Human-readable console summary. Not a stable interface; the JSON
/// file is the one to parse.
pub fn print_report(report: &TestReport) {
    let summary = &report.summary;

    println!("\n{}", "=".repeat(70));
    println!("{} TEST EXECUTION REPORT", "📊".blue());
    println!("{}", "=".repeat(70));

    println!("\n{} Summary:", "📈".blue());
    println!("   Total Tests: {}", summary.total);
    println!("   {} Passed: {}", "✅".green(), summary.passed);
    println!("   {} Failed: {}", "❌".red(), summary.failed);
    println!("   {} Errors: {}", "⚠️".yellow(), summary.errors);
    println!("   Success Rate: {:.1}%", summary.success_rate);
    println!("   Total Duration: {:.2}s", summary.total_duration);
    println!("   Average Duration: {:.2}s", summary.average_duration);

    println!("\n{} Detailed Results:", "📋".blue());
    println!("{}", "-".repeat(70));
    for result in &report.results {
        let icon = match result.status {
            TestStatus::Pass => "✅",
            TestStatus::Fail => "❌",
            TestStatus::Error => "⚠️",
        };
        println!("\n{} {}", icon, result.test_name.bold());
        println!("   Username: {}", result.username);
        println!("   Expected: {}", result.expected);
        match result.actual {
            Some(actual) => println!("   Actual: {}", actual),
            None => println!("   Actual: {}", "not classified".dimmed()),
        }
        println!("   Duration: {:.2}s", result.duration);
        if let Some(ref screenshot) = result.screenshot {
            println!("   Screenshot: {}", screenshot);
        }
        if let Some(ref message) = result.error_message {
            println!("   Error: {}", message.red());
        }
    }

    println!("\n{} Insights:", "💡".yellow());
    for insight in &report.insights {
        println!("   {}", insight);
    }
}
