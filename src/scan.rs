use crate::cli::CommonArgs;
use crate::error::{GitcalError, Result};
use crate::registry::Registry;
use anyhow::Context;
use console::style;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SKIPPED_DIRS: [&str; 3] = [".git", "vendor", "node_modules"];

/// Every directory below `root` (including `root`) that holds a `.git` directory.
///
/// Hidden and git-ignored directories are walked too; `.git`, `vendor` and
/// `node_modules` are never entered.
pub fn find_repositories<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let root = root
        .canonicalize()
        .map_err(|e| GitcalError::Scan(format!("{}: {e}", root.display())))?;
    if !root.is_dir() {
        return Err(GitcalError::Scan(format!("not a directory: {}", root.display())));
    }

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !SKIPPED_DIRS.contains(&name))
        })
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable path: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        if entry.path().join(".git").is_dir() {
            info!(repo = %entry.path().display(), "found repository");
            repos.push(entry.into_path());
        }
    }

    Ok(repos)
}

pub fn exec(common: CommonArgs, folder: PathBuf) -> anyhow::Result<()> {
    let registry =
        Registry::locate(common.registry.as_deref()).context("Failed to locate registry")?;

    println!("{}\n", style("Found folders:").bold());
    let repos = find_repositories(&folder)
        .with_context(|| format!("Failed to scan {}", folder.display()))?;
    for repo in &repos {
        println!("{}", repo.display());
    }

    registry
        .add(&repos)
        .with_context(|| format!("Failed to update {}", registry.path().display()))?;

    println!("\n\n{}\n", style("Successfully added").green());
    Ok(())
}
