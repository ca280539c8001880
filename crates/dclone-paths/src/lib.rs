use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found; set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.dclone/` directory layout.
///
/// Single source of truth for every path under `~/.dclone/`. Use `resolve()` in
/// production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct DclonePaths {
    dclone_dir: PathBuf,
}

impl DclonePaths {
    /// Resolve paths from the user's home directory (`~/.dclone`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            dclone_dir: home.join(".dclone"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(dclone_dir: PathBuf) -> Self {
        Self { dclone_dir }
    }

    /// The base `~/.dclone` directory.
    pub fn dclone_dir(&self) -> &Path {
        &self.dclone_dir
    }

    pub fn user_config(&self) -> PathBuf {
        self.dclone_dir.join("config.toml")
    }

    /// Persisted notification preferences (global switch + per-server map).
    pub fn preferences_file(&self) -> PathBuf {
        self.dclone_dir.join("preferences.json")
    }

    /// Project-level config: `<project_root>/.dclone/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".dclone").join("config.toml")
    }
}
