use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Severity of a message handed to a [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error => log::Level::Error,
        }
    }
}

/// Observability sink handed to components instead of a global logger.
pub trait Logger {
    fn log(&self, level: Level, message: &str);
}

/// Adapts a plain `Fn(Level, &str)` into a [`Logger`].
pub struct FnLogger<F>(F);

impl<F: Fn(Level, &str)> Logger for FnLogger<F> {
    fn log(&self, level: Level, message: &str) {
        (self.0)(level, message)
    }
}

pub fn logger_fn<F: Fn(Level, &str)>(f: F) -> FnLogger<F> {
    FnLogger(f)
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

/// Forwards messages to the `log` facade under a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct LogCrateLogger {
    target: &'static str,
}

impl LogCrateLogger {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogCrateLogger {
    fn default() -> Self {
        Self::new("lens")
    }
}

impl Logger for LogCrateLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target, log::Level::from(level), "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Backend for the `log` facade that writes to stdout.
pub struct StdoutLogger;

impl StdoutLogger {
    fn format(record: &Record) -> String {
        format!(
            "{} [{}] [thread:{:?}] {}:{} - {}",
            format_timestamp(),
            record.level(),
            std::thread::current().id(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", Self::format(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Format current time as YYYY-MM-DDTHH:MM:SS (UTC)
pub fn format_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let (year, month, day) = civil_from_days(days as i64);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Days since Unix epoch to civil (year, month, day), Howard Hinnant's algorithm.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Install [`StdoutLogger`] as the global `log` backend.
///
/// Debug builds log everything, release builds suppress Debug.
/// Only the first call per process has any effect.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}
