use serde::Deserialize;

use crate::{Settings, WorkspaceError};

const SUPPORTED_VERSION: u8 = 1;

/// Parse yaml settings.
pub fn parse_settings(input: &str) -> Result<Settings, WorkspaceError> {
    let version = parse_version(input)?;
    if version != SUPPORTED_VERSION {
        return Err(WorkspaceError::UnsupportedVersion(version));
    }
    Ok(serde_yaml::from_str(input)?)
}

/// Settings with only the version read.
#[derive(Debug, Clone, Deserialize)]
struct Versioned {
    version: u8,
}

fn parse_version(input: &str) -> Result<u8, WorkspaceError> {
    let raw: Versioned = serde_yaml::from_str(input)?;
    Ok(raw.version)
}
