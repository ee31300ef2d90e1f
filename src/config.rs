use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the ledger file location.
pub(crate) const LEDGER_FILE_ENV: &str = "FINLEDGER_FILE";
const LEDGER_FILE_NAME: &str = "finance_data.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LedgerConfig {
    pub(crate) path: PathBuf,
}

impl LedgerConfig {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$FINLEDGER_FILE` when set, otherwise `finance_data.csv` in the
    /// platform data directory.
    pub(crate) fn from_env() -> Result<Self> {
        match std::env::var(LEDGER_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Ok(Self::new(shellexpand(path.trim()))),
            _ => Ok(Self::new(default_data_dir()?.join(LEDGER_FILE_NAME))),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "finledger", "finledger")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
