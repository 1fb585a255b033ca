//! Verbose output and the `log` backend
//!
//! Everything here writes to stderr so table, CSV and JSON output on stdout
//! stays clean for piping.

use log::{Level, LevelFilter, Log, Metadata, Record};

static QUIET_LOGGER: VerboseLogger = VerboseLogger::new(false);
static VERBOSE_LOGGER: VerboseLogger = VerboseLogger::new(true);

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
}

pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}

pub fn log_warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

/// `log` backend: warnings and errors always, debug and info only when verbose
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn max_level(&self) -> LevelFilter {
        if self.enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

impl Log for VerboseLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = record.args().to_string();
        match record.level() {
            Level::Error => log_error(&msg),
            Level::Warn => log_warning(&msg),
            Level::Info | Level::Debug | Level::Trace => print_verbose(self.enabled, &msg),
        }
    }

    fn flush(&self) {}
}

/// Install the logger once per process. Later calls are ignored.
pub fn init_logging(verbose: bool) {
    let logger = if verbose {
        &VERBOSE_LOGGER
    } else {
        &QUIET_LOGGER
    };
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.max_level());
    }
}
