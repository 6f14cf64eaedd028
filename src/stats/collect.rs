use super::Aggregator;
use crate::error::{GitcalError, Result};
use crate::git::GitRepo;
use crate::model::{CommitRecord, DayBucketMap};
use crate::registry::RepositoryProvider;
use crate::util::Today;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one stats run over all registered repositories.
#[derive(Debug)]
pub struct Collected {
    pub buckets: DayBucketMap,
    pub skipped: Vec<(PathBuf, GitcalError)>,
}

/// Scan every repository the provider lists and sum `email`'s commits.
///
/// Repositories that fail to open or to list their branches are recorded in
/// `skipped` and the run continues with the rest. Only a failing provider
/// aborts.
pub fn collect_buckets<P>(
    provider: &P,
    email: &str,
    months: u32,
    today: Today,
) -> Result<Collected>
where
    P: RepositoryProvider + ?Sized,
{
    let repos = provider.repositories()?;
    let mut aggregator = Aggregator::new(today, months);
    let mut skipped = Vec::new();

    let pb = ProgressBar::new(repos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for path in repos {
        pb.set_message(path.display().to_string());
        match scan_repository(&path, email) {
            Ok(commits) => {
                let counted = aggregator.extend(&commits);
                info!(
                    repo = %path.display(),
                    authored = commits.len(),
                    counted,
                    "repository scanned"
                );
            }
            Err(e) => {
                warn!(repo = %path.display(), "skipping repository: {e}");
                skipped.push((path, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(Collected {
        buckets: aggregator.finish(),
        skipped,
    })
}

fn scan_repository(path: &Path, email: &str) -> Result<Vec<CommitRecord>> {
    GitRepo::open(path)?.authored_commits(email)
}
