mod parse;
mod settings;
mod workspace;

use thiserror::Error;

pub use parse::parse_settings;
pub use settings::Settings;
pub use workspace::Workspace;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("path is not a file: {0}")]
    PathIsNotFile(String),
    #[error("settings not found: {0}")]
    SettingsNotFound(String),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
