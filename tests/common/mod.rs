#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::{tempdir, TempDir};

pub const NOW: &str = "2024-05-15T12:00:00+00:00";
pub const EMAIL: &str = "you@example.com";

static COMMITS: AtomicUsize = AtomicUsize::new(0);

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = tempdir().unwrap();
        git(dir.path(), &["init"]);
        git(dir.path(), &["config", "user.email", EMAIL]);
        git(dir.path(), &["config", "user.name", "Your Name"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Empty commit authored by `email` at the RFC3339 instant `date`.
    pub fn commit_as(&self, email: &str, date: &str) {
        let n = COMMITS.fetch_add(1, Ordering::Relaxed);
        assert!(Command::new("git")
            .args(["commit", "-q", "--allow-empty", "-m", &format!("work #{n} at {date}")])
            .env("GIT_AUTHOR_NAME", "Author")
            .env("GIT_AUTHOR_EMAIL", email)
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .current_dir(self.path())
            .status()
            .unwrap()
            .success());
    }

    pub fn commit(&self, date: &str) {
        self.commit_as(EMAIL, date);
    }

    /// Create `name` at HEAD and switch to it.
    pub fn branch(&self, name: &str) {
        git(self.path(), &["checkout", "-q", "-b", name]);
    }

    pub fn checkout_previous(&self) {
        git(self.path(), &["checkout", "-q", "-"]);
    }
}
