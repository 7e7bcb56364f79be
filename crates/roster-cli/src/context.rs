use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use roster_runtime::{resolve_data_path, Config, Roster};
use std::path::{Path, PathBuf};

/// Lazily-initialized execution state shared by all handlers.
pub struct ExecutionContext {
    data_dir: PathBuf,
    snapshot_override: Option<PathBuf>,
    config: OnceCell<Config>,
    roster: OnceCell<Roster>,
}

impl ExecutionContext {
    pub fn new(data_dir: Option<String>, snapshot: Option<String>) -> Result<Self> {
        let data_dir = resolve_data_path(data_dir.as_deref())?;

        Ok(Self {
            data_dir,
            snapshot_override: snapshot.map(PathBuf::from),
            config: OnceCell::new(),
            roster: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
                .with_context(|| format!("Failed to load {}", config_path.display()))
        })
    }

    /// Snapshot file priority: `--snapshot` flag, then the configured
    /// default, then `members.json` in the data directory.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.snapshot_override {
            return Ok(path.clone());
        }
        if let Some(path) = &self.config()?.snapshot {
            return Ok(path.clone());
        }
        Ok(self.data_dir.join("members.json"))
    }

    pub fn roster(&self) -> Result<&Roster> {
        self.roster.get_or_try_init(|| {
            let path = self.snapshot_path()?;
            Roster::open(&path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))
        })
    }

    /// Page size: explicit flag wins over the configured default.
    pub fn page_size(&self, explicit: Option<usize>) -> Result<usize> {
        match explicit {
            Some(size) => Ok(size),
            None => Ok(self.config()?.page_size),
        }
    }
}
