use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read env file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },
}

impl SettingsError {
    pub(crate) fn env_file(path: impl Into<PathBuf>, source: dotenv::Error) -> Self {
        Self::EnvFile {
            path: path.into(),
            source,
        }
    }
}
