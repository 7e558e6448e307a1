use colored::Colorize;
use padscan_gamepad::{Reporter, Severity};

use crate::{print_error, print_info, print_warning};

/// Writes enumeration messages through the console log macros.
pub(crate) struct ConsoleReporter {
    summary: bool,
}

impl ConsoleReporter {
    pub fn new(summary: bool) -> Self {
        Self { summary }
    }

    /// Whether a message of this severity reaches the console.
    pub fn shows(&self, severity: Severity) -> bool {
        !self.summary || severity != Severity::Info
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, severity: Severity, message: String) {
        if !self.shows(severity) {
            return;
        }
        match severity {
            Severity::Info => {
                print_info!("{message}");
            }
            Severity::Warning => {
                print_warning!("{message}");
            }
            Severity::Error => {
                print_error!("{message}");
            }
        }
    }
}
