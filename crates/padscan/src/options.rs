use std::collections::BTreeMap;

use padscan_workspace::Settings;

use crate::cli::Cli;

/// Effective run options: settings file values with CLI flags on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Options {
    pub verbose: bool,
    pub color: bool,
    pub summary: bool,
    pub hints: BTreeMap<String, String>,
}

impl Options {
    pub fn new(cli: &Cli, settings: &Settings) -> Self {
        Self {
            verbose: cli.verbose || settings.verbose(),
            color: !cli.no_color && settings.color(),
            summary: cli.summary,
            hints: settings.hints.clone(),
        }
    }
}
