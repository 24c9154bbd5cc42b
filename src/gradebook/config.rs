use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// File name of the database when no path is given.
pub const DEFAULT_DB_FILENAME: &str = "students.db";

/// Environment variable that overrides the database location.
pub const DB_ENV_VAR: &str = "GRADEBOOK_DB";

/// Where the gradebook keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradebookConfig {
    pub db_path: PathBuf,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl GradebookConfig {
    /// Uses `db_path` when given (flag or env var), otherwise the default.
    pub fn resolve(db_path: Option<PathBuf>) -> Self {
        match db_path {
            Some(db_path) => Self { db_path },
            None => Self::default(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

/// `students.db` in the user's home directory, or in the current directory
/// when no home can be determined.
pub fn default_db_path() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(DEFAULT_DB_FILENAME),
        None => PathBuf::from(DEFAULT_DB_FILENAME),
    }
}
