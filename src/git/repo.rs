use crate::error::{GitcalError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`. Parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = gix::open(&path)?;
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Commits authored by `email` reachable from any local branch.
    ///
    /// Each commit is examined once per repository even when several branches
    /// reach it. Branches that cannot be walked are skipped.
    pub fn authored_commits(&self, email: &str) -> Result<Vec<CommitRecord>> {
        let platform = self
            .repo
            .references()
            .map_err(|e| GitcalError::ReferenceEnumeration(e.to_string()))?;
        let branches = platform
            .local_branches()
            .map_err(|e| GitcalError::ReferenceEnumeration(e.to_string()))?;

        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut commits = Vec::new();

        for branch in branches {
            let mut branch = match branch {
                Ok(branch) => branch,
                Err(e) => {
                    debug!(repo = %self.path.display(), "unreadable branch reference: {e}");
                    continue;
                }
            };

            match self.walk_branch(&mut branch, email, &mut seen, &mut commits) {
                Ok(found) => trace!(
                    repo = %self.path.display(),
                    branch = %branch.name().shorten(),
                    found,
                    "branch walked"
                ),
                Err(e) => debug!(repo = %self.path.display(), "skipping branch: {e}"),
            }
        }

        Ok(commits)
    }

    fn walk_branch(
        &self,
        branch: &mut gix::Reference<'_>,
        email: &str,
        seen: &mut HashSet<ObjectId>,
        commits: &mut Vec<CommitRecord>,
    ) -> Result<usize> {
        let name = branch.name().shorten().to_string();
        let walk_error = |reason: String| GitcalError::BranchWalk {
            branch: name.clone(),
            reason,
        };

        let tip = branch
            .peel_to_id_in_place()
            .map_err(|e| walk_error(e.to_string()))?
            .detach();
        let walk = self
            .repo
            .rev_walk([tip])
            .all()
            .map_err(|e| walk_error(e.to_string()))?;

        let mut found = 0;
        for info in walk {
            let info = match info {
                Ok(info) => info,
                Err(e) => {
                    debug!(branch = %name, "history walk stopped early: {e}");
                    break;
                }
            };
            if !seen.insert(info.id) {
                continue;
            }

            let commit = match self.repo.find_commit(info.id) {
                Ok(commit) => commit,
                Err(e) => {
                    debug!(commit = %info.id, "unreadable commit: {e}");
                    continue;
                }
            };
            let author = match commit.author() {
                Ok(author) => author,
                Err(e) => {
                    debug!(commit = %info.id, "unreadable author: {e}");
                    continue;
                }
            };
            if author.email != email {
                continue;
            }

            let authored = author
                .time()
                .ok()
                .and_then(|time| to_datetime(time.seconds, time.offset));
            let Some(authored) = authored else {
                debug!(commit = %info.id, "invalid author timestamp");
                continue;
            };

            commits.push(CommitRecord {
                id: info.id.to_string(),
                author_email: author.email.to_string(),
                authored,
            });
            found += 1;
        }

        Ok(found)
    }
}

fn to_datetime(seconds: i64, offset: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset)?;
    DateTime::from_timestamp(seconds, 0).map(|utc| utc.with_timezone(&offset))
}
