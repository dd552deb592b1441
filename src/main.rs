use clap::Parser;
use git_churn::commands::churn::handle_churn;
use git_churn::observability::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "git-churn")]
#[command(about = "Measure commit latency and repository growth under synthetic churn", long_about = None)]
struct Cli {
    /// Root of the git repository to churn
    repository_path: Option<PathBuf>,

    /// Number of commits to create (non-numeric values fall back to 100)
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    num_commits: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    handle_churn(cli.repository_path, cli.num_commits.as_deref())
}
