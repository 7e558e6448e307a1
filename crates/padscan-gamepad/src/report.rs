use std::fmt;

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Sink for human-readable enumeration messages.
pub trait Reporter {
    fn report(&mut self, severity: Severity, message: String);

    fn info(&mut self, message: String) {
        self.report(Severity::Info, message);
    }

    fn error(&mut self, message: String) {
        self.report(Severity::Error, message);
    }
}

/// Forwards messages to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, severity: Severity, message: String) {
        (**self).report(severity, message);
    }
}
