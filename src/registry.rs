use crate::cli::CommonArgs;
use crate::error::{GitcalError, Result};
use anyhow::Context;
use console::style;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const REGISTRY_FILE_NAME: &str = ".gitcal";

/// Supplies the repository roots a stats run scans, in order.
pub trait RepositoryProvider {
    fn repositories(&self) -> Result<Vec<PathBuf>>;
}

impl RepositoryProvider for [PathBuf] {
    fn repositories(&self) -> Result<Vec<PathBuf>> {
        Ok(self.to_vec())
    }
}

impl RepositoryProvider for Vec<PathBuf> {
    fn repositories(&self) -> Result<Vec<PathBuf>> {
        Ok(self.clone())
    }
}

/// Flat file of repository paths, one per line.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Registry at `path`, or `~/.gitcal` when not given.
    pub fn locate(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => dirs::home_dir()
                .map(|home| Self::new(home.join(REGISTRY_FILE_NAME)))
                .ok_or_else(|| GitcalError::Registry {
                    path: PathBuf::from(REGISTRY_FILE_NAME),
                    source: std::io::Error::new(ErrorKind::NotFound, "home directory not found"),
                }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registered paths; a registry that does not exist yet is empty.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(GitcalError::Registry {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Overwrite the registry with `repos`.
    pub fn save(&self, repos: &[PathBuf]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GitcalError::Registry {
                path: self.path.clone(),
                source,
            })?;
        }

        let content = repos
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.path, content).map_err(|source| GitcalError::Registry {
            path: self.path.clone(),
            source,
        })
    }

    /// Append the paths not registered yet and save. Returns the full list.
    pub fn add(&self, new: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let repos = merge_paths(self.load()?, new);
        self.save(&repos)?;
        Ok(repos)
    }
}

impl RepositoryProvider for Registry {
    fn repositories(&self) -> Result<Vec<PathBuf>> {
        self.load()
    }
}

/// `existing` followed by every path of `new` it does not already hold.
pub fn merge_paths(mut existing: Vec<PathBuf>, new: &[PathBuf]) -> Vec<PathBuf> {
    for path in new {
        if !existing.contains(path) {
            existing.push(path.clone());
        }
    }
    existing
}

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let registry =
        Registry::locate(common.registry.as_deref()).context("Failed to locate registry")?;
    let repos = registry.load().context("Failed to read registry")?;

    if repos.is_empty() {
        println!("No repositories registered in {}", registry.path().display());
        return Ok(());
    }

    println!("{}", style(format!("Registered repositories ({})", repos.len())).bold());
    for repo in repos {
        println!("  {}", repo.display());
    }
    Ok(())
}
