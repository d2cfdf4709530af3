use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Verbose => write!(f, "verbose"),
        }
    }
}

/// Plain stderr/stdout logger. Errors and warnings go to stderr; info and
/// verbose lines to stdout, with verbose gated on the flag.
#[derive(Debug, Clone)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Error | LogLevel::Warning | LogLevel::Info => true,
            LogLevel::Verbose => self.verbose,
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }
        match level {
            LogLevel::Error => eprintln!("error: {}", message),
            LogLevel::Warning => eprintln!("warning: {}", message),
            LogLevel::Info | LogLevel::Verbose => println!("{}", message),
        }
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Progress over the file-write phase of one property set: one unit for
/// folder creation, one per cleared entry and one per written file. In
/// verbose mode the bar is replaced by log lines so the two don't fight
/// over the terminal.
pub struct WriteProgress {
    bar: Option<ProgressBar>,
    file_count: usize,
}

impl WriteProgress {
    pub fn new(logger: &Logger, property_set: &str, file_count: usize) -> Self {
        let bar = if logger.is_verbose() {
            None
        } else {
            let bar = ProgressBar::new((file_count * 2 + 1) as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:30.cyan}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar.set_message(format!("Generating Java types for {}", property_set));
            Some(bar)
        };
        Self { bar, file_count }
    }

    /// The output folder exists; the real work budget is now known.
    pub fn folder_created(&self, stale_entries: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length((1 + stale_entries + self.file_count) as u64);
            bar.inc(1);
        }
    }

    pub fn cleared(&self, entries: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(entries as u64);
        }
    }

    pub fn wrote(&self, _file_name: &str) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for WriteProgress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
