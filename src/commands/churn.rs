use crate::churn::{RunSummary, run_churn};
use crate::config::{ChurnConfig, parse_iterations};
use crate::error::ChurnError;
use crate::git::GitCli;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

pub const USAGE: &str = "Usage: git-churn <repository_path> [num_commits]";

/// Entry point for a churn run. This is the only place that turns a failure
/// into a process exit status.
pub fn handle_churn(repo_path: Option<PathBuf>, iterations: Option<&str>) -> ExitCode {
    let Some(repo_path) = repo_path else {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    };

    match execute(repo_path, iterations) {
        Ok(summary) => {
            tracing::debug!(
                commits = summary.iterations,
                growth_per_commit = summary.growth_per_commit,
                "churn run finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "churn run aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(repo_path: PathBuf, iterations: Option<&str>) -> Result<RunSummary, ChurnError> {
    let config = ChurnConfig::new(repo_path, parse_iterations(iterations)).with_env_overrides()?;
    let git = GitCli::new(config.git_bin.clone());

    let seed = time_seed();
    tracing::debug!(
        repo = %config.repo_path.display(),
        iterations = config.iterations,
        git = git.git_bin(),
        seed,
        "starting churn run"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_churn(&config, &git, &mut rng, &mut out)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
