use crate::churn::mutation::mutate_file;
use crate::churn::report::{
    CommitRecord, HEAD_PLACEHOLDER, RunSummary, format_delta, format_row, header,
};
use crate::churn::sampler::metadata_size;
use crate::churn::scanner::collect_candidates;
use crate::config::ChurnConfig;
use crate::error::ChurnError;
use crate::git::VersionControl;
use crate::git::repository::commit_message;
use rand::Rng;
use std::io::Write;
use std::time::{Duration, Instant};

/// Running totals carried across iterations.
#[derive(Debug)]
pub struct RunStatistics {
    pub start_size: u64,
    pub end_size: u64,
    pub total_io: Duration,
    pub commits: usize,
    previous_io: Option<Duration>,
    started: Instant,
}

impl RunStatistics {
    pub fn start(start_size: u64) -> Self {
        Self {
            start_size,
            end_size: start_size,
            total_io: Duration::ZERO,
            commits: 0,
            previous_io: None,
            started: Instant::now(),
        }
    }

    /// Fold in one iteration and return its rendered delta column.
    pub fn record(&mut self, record: &CommitRecord) -> String {
        let delta = format_delta(self.previous_io, record.duration);
        self.previous_io = Some(record.duration);
        self.total_io += record.duration;
        self.end_size = record.size;
        self.commits += 1;
        delta
    }

    pub fn finish(self, target_commits: u64) -> RunSummary {
        RunSummary::compute(
            self.start_size,
            self.end_size,
            self.commits,
            target_commits,
            self.started.elapsed(),
            self.total_io,
        )
    }
}

/// Run `config.iterations` rounds of select, mutate, commit and sample,
/// writing the table and final summary to `out`.
///
/// The first failing scan, mutation or commit ends the run with that error and
/// no summary is written.
pub fn run_churn<V, R, W>(
    config: &ChurnConfig,
    vcs: &V,
    rng: &mut R,
    out: &mut W,
) -> Result<RunSummary, ChurnError>
where
    V: VersionControl + ?Sized,
    R: Rng,
    W: Write,
{
    let mut stats = RunStatistics::start(metadata_size(&config.repo_path, &config.metadata_dir));

    writeln!(out, "{}", header())?;
    for iteration in 1..=config.iterations {
        let record = run_iteration(config, vcs, rng, iteration)?;
        let delta = stats.record(&record);
        writeln!(out, "{}", format_row(&record, &delta))?;
    }

    let summary = stats.finish(config.target_commits);
    write!(out, "{}", summary.render())?;
    out.flush()?;
    Ok(summary)
}

fn run_iteration<V, R>(
    config: &ChurnConfig,
    vcs: &V,
    rng: &mut R,
    iteration: usize,
) -> Result<CommitRecord, ChurnError>
where
    V: VersionControl + ?Sized,
    R: Rng,
{
    let repo = &config.repo_path;

    let candidates = collect_candidates(repo, &config.extension, &config.metadata_dir)?;
    let target = &candidates[rng.gen_range(0..candidates.len())];

    mutate_file(target, &config.marker, rng)?;
    let duration = vcs.commit_all(repo, &commit_message(target))?;

    let sha = vcs.head_identifier(repo).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "head lookup failed, using placeholder");
        HEAD_PLACEHOLDER.to_string()
    });
    let size = metadata_size(repo, &config.metadata_dir);

    Ok(CommitRecord {
        sha,
        iteration,
        duration,
        size,
    })
}
