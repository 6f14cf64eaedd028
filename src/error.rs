use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitcalError>;

#[derive(Error, Debug)]
pub enum GitcalError {
    #[error("not a git repository: {0}")]
    RepositoryOpen(#[from] Box<gix::open::Error>),
    #[error("cannot list branches: {0}")]
    ReferenceEnumeration(String),
    #[error("cannot walk branch {branch}: {reason}")]
    BranchWalk { branch: String, reason: String },
    #[error("Registry error at {path}: {source}")]
    Registry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Scan error: {0}")]
    Scan(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<gix::open::Error> for GitcalError {
    fn from(err: gix::open::Error) -> Self {
        GitcalError::RepositoryOpen(Box::new(err))
    }
}
