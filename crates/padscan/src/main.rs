mod cli;
mod logging;
mod options;
mod reporter;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use padscan_gamepad::{apply_hints, enumerate, SdlBackend};
use padscan_workspace::{Settings, Workspace};

use crate::{cli::Cli, options::Options, reporter::ConsoleReporter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let workspace = Workspace::new(cli.config.as_deref());
    let loaded = workspace.load();
    let (options, load_error) = match &loaded {
        Ok(settings) => (Options::new(&cli, settings), None),
        Err(e) => (Options::new(&cli, &Settings::defaults()), Some(e)),
    };

    if logging::setup(options.verbose, !options.color).is_err() {
        return ExitCode::FAILURE;
    }

    if let Some(e) = load_error {
        print_error!("failed to load settings: {e}");
        return ExitCode::FAILURE;
    }
    match workspace.settings_path() {
        Some(path) => {
            print_debug!("settings: {}", path.display());
        }
        None => {
            print_debug!("settings: no default location, using defaults");
        }
    }

    for hint in apply_hints(&options.hints) {
        if hint.applied {
            print_debug!("applied hint {}={}", hint.key, hint.value);
        } else {
            print_warning!("hint {} was not applied", hint.key);
        }
    }

    let backend = match SdlBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            print_error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = ConsoleReporter::new(options.summary);
    let enumeration = enumerate(&backend, &mut reporter);
    print_info!(
        "Enumerated {} of {} devices",
        enumeration.opened(),
        enumeration.count
    );

    ExitCode::SUCCESS
}
