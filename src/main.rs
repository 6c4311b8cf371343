use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use login_tester::{report, runner};

const DEFAULT_LOGIN_URL: &str = "https://practicetestautomation.com/practice-test-login/";

#[derive(Parser)]
#[command(name = "login-tester")]
#[command(version = "0.1.0")]
#[command(about = "Browser-driven login page testing CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the login test suite against a target page
    Run {
        /// Login page URL under test
        #[arg(short, long, default_value = DEFAULT_LOGIN_URL)]
        url: String,

        /// Output directory for reports and screenshots
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Show the browser window instead of running headless
        #[arg(long, default_value = "false")]
        headed: bool,

        /// JSON file with a custom test case table (defaults to the built-in suite)
        #[arg(short, long)]
        cases: Option<PathBuf>,
    },

    /// Re-render a saved report to the console
    Report {
        /// Path to a test report JSON file
        results: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            url,
            output,
            headed,
            cases,
        } => {
            println!("{} Target: {}", "▶".green().bold(), url.cyan());
            println!("  Output: {}", output.display().to_string().cyan());
            if let Some(ref path) = cases {
                println!("  Cases: {}", path.display().to_string().cyan());
            }

            runner::run_login_tests(runner::RunOptions {
                login_url: url,
                output_dir: output,
                headless: !headed,
                cases_file: cases,
            })
            .await?;
        }

        Commands::Report { results } => {
            println!(
                "{} Rendering report from: {}",
                "📊".blue(),
                results.display()
            );
            report::generate_report(&results).await?;
        }
    }

    Ok(())
}
