use crate::utils::{format_commit_count, format_duration, human_size};
use std::time::Duration;

/// Shown in place of the commit id when the tip lookup fails.
pub const HEAD_PLACEHOLDER: &str = "???????";

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Result of one churn iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    /// One-based iteration number.
    pub iteration: usize,
    pub duration: Duration,
    /// Metadata directory size right after the commit.
    pub size: u64,
}

/// Change in commit time against the previous iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Increase(Duration),
    Decrease(Duration),
    Unchanged,
}

impl Delta {
    pub fn between(previous: Duration, current: Duration) -> Self {
        if current > previous {
            Delta::Increase(current - previous)
        } else if current < previous {
            Delta::Decrease(previous - current)
        } else {
            Delta::Unchanged
        }
    }

    pub fn render(&self) -> String {
        match self {
            Delta::Increase(d) => format!("{}+{}{}", RED, format_duration(*d), RESET),
            Delta::Decrease(d) => format!("{}-{}{}", GREEN, format_duration(*d), RESET),
            Delta::Unchanged => "=".to_string(),
        }
    }
}

/// Delta column for an iteration; empty when there is no previous iteration.
pub fn format_delta(previous: Option<Duration>, current: Duration) -> String {
    previous
        .map(|prev| Delta::between(prev, current).render())
        .unwrap_or_default()
}

pub fn header() -> String {
    format!(
        "{:<7}  {:>6}  {:>12}  {:>8}  {}",
        "sha", "commit", "size", "io", "delta"
    )
}

pub fn format_row(record: &CommitRecord, delta: &str) -> String {
    format!(
        "{:<7}  {:>6}  {:>12}  {:>8}  {}",
        record.sha,
        record.iteration,
        human_size(record.size as i64),
        format_duration(record.duration),
        delta
    )
}

/// Aggregate growth and timing for a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub iterations: usize,
    pub start_size: u64,
    pub end_size: u64,
    /// Average metadata growth per commit in bytes. Zero for an empty run.
    pub growth_per_commit: f64,
    pub target_commits: u64,
    /// Extrapolated metadata size at `target_commits` commits.
    pub estimated_size: i64,
    pub total_time: Duration,
    pub total_io: Duration,
    pub overhead: Duration,
    pub io_percent: f64,
}

impl RunSummary {
    pub fn compute(
        start_size: u64,
        end_size: u64,
        iterations: usize,
        target_commits: u64,
        total_time: Duration,
        total_io: Duration,
    ) -> Self {
        let growth_per_commit = if iterations == 0 {
            0.0
        } else {
            (end_size as i64 - start_size as i64) as f64 / iterations as f64
        };
        let estimated_size =
            start_size as i64 + (growth_per_commit * target_commits as f64) as i64;

        let io_percent = if total_time.is_zero() {
            0.0
        } else {
            total_io.as_secs_f64() / total_time.as_secs_f64() * 100.0
        };

        Self {
            iterations,
            start_size,
            end_size,
            growth_per_commit,
            target_commits,
            estimated_size,
            total_time,
            total_io,
            overhead: total_time.saturating_sub(total_io),
            io_percent,
        }
    }

    /// The trailing summary block, starting with a blank separator line.
    pub fn render(&self) -> String {
        format!(
            "\ngrowth: ~{}/commit, est @ {}: {}\ntime: {} total, {} io ({:.0}%), {} overhead\n",
            human_size(self.growth_per_commit as i64),
            format_commit_count(self.target_commits),
            human_size(self.estimated_size),
            format_duration(self.total_time),
            format_duration(self.total_io),
            self.io_percent,
            format_duration(self.overhead),
        )
    }
}
