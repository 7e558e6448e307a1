use std::collections::BTreeMap;

use serde::Deserialize;

/// User settings read from `padscan.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub version: u8,
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub color: Option<bool>,
    /// SDL hints applied before initialization, in key order.
    #[serde(default)]
    pub hints: BTreeMap<String, String>,
}

impl Settings {
    /// Settings used when no settings file exists.
    pub fn defaults() -> Self {
        Self {
            version: 1,
            ..Self::default()
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
