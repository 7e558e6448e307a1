use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{parse_settings, Settings, WorkspaceError};

const DEFAULT_WORKSPACE_PATH: &str = ".config/padscan";
const XDG_WORKSPACE_PATH: &str = "padscan";
const SETTINGS_FILE_NAME: &str = "padscan.yaml";

/// Location of the settings file.
pub struct Workspace {
    settings_path: Option<PathBuf>,
    explicit: bool,
}

impl Workspace {
    /// Uses `path` as the settings file if given, the default location otherwise.
    /// Without `HOME` or `XDG_CONFIG_HOME` there is no default location and
    /// [`Workspace::load`] yields default settings.
    pub fn new(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self {
                settings_path: Some(path.to_owned()),
                explicit: true,
            },
            None => Self {
                settings_path: Self::default_path().map(|p| p.join(SETTINGS_FILE_NAME)),
                explicit: false,
            },
        }
    }

    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Reads the settings file.
    /// A missing file is only an error when its path was given explicitly.
    pub fn load(&self) -> Result<Settings, WorkspaceError> {
        let Some(path) = &self.settings_path else {
            return Ok(Settings::defaults());
        };
        if !path.exists() {
            if self.explicit {
                return Err(WorkspaceError::SettingsNotFound(
                    path.display().to_string(),
                ));
            }
            return Ok(Settings::defaults());
        }
        if !path.is_file() {
            return Err(WorkspaceError::PathIsNotFile(path.display().to_string()));
        }

        let input = std::fs::read_to_string(path)?;
        parse_settings(&input)
    }

    /// Settings directory from the process environment.
    pub fn default_path() -> Option<PathBuf> {
        default_dir(
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        )
    }
}

/// `$XDG_CONFIG_HOME/padscan` when set and non-empty, `$HOME/.config/padscan` otherwise.
fn default_dir(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(config) = xdg_config_home.filter(|c| !c.is_empty()) {
        return Some(PathBuf::from(config).join(XDG_WORKSPACE_PATH));
    }
    home.filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(DEFAULT_WORKSPACE_PATH))
}
