//! Levelled logging with visual formatting.
//!
//! Two families of macros live here. The semantic macros (`log_debug!`,
//! `log_info!`, `log_warning!`, `log_error!`, `log_critical!`) carry a
//! [`Level`] and are filtered against the threshold chosen at startup. The
//! decorated macros (`log_block_start!`, `log_indented!`, `log_pipe!`,
//! `log_version!`, `log_end!`, `log_error_exit!`) draw the box structure used
//! for user-facing output such as help text and fatal errors, and are only
//! subject to [`Log::set_enabled`].
//!
//! Process-wide state is initialised once by `main` through
//! [`Log::init_from_env`] and [`Log::start_file_logging`]. Library code that
//! must stay free of global reads (the physics kernel) writes through the
//! [`LogSink`] trait instead.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

// Stdout threshold, stored as `Level as u8`.
static STDOUT_LEVEL: AtomicU8 = AtomicU8::new(Level::Error as u8);

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();

/// Records at or above this level are appended to the log file.
pub const FILE_LEVEL: Level = Level::Info;

/// Environment variable consulted by [`Log::init_from_env`].
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Severity of a log record, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Only for diagnosis
    Debug = 0,
    /// Things are working as expected
    Info = 1,
    /// Nothing is broken, something unexpected happened
    Warning = 2,
    /// Something has broken
    Error = 3,
    /// Everything is on fire
    Critical = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warning,
            3 => Level::Error,
            _ => Level::Critical,
        }
    }

    // ANSI colour used for the level tag on stdout.
    fn colour(&self) -> &'static str {
        match self {
            Level::Debug | Level::Info => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error | Level::Critical => "\x1b[31m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not one of [`Level::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Destination for structured log records.
///
/// Computation code receives a `&dyn LogSink` rather than touching the
/// global logger, so tests can substitute a recording sink.
pub trait LogSink {
    fn record(&self, level: Level, message: &str);
}

/// Sink that drops every record.
pub struct NullSink;

impl LogSink for NullSink {
    fn record(&self, _level: Level, _message: &str) {}
}

/// Main logging interface.
///
/// ## Logging Conventions
///
/// - **`log_block_start!`**: starts a new conceptual block. Prints an empty
///   pipe `┃` for spacing, then `┣ message`.
/// - **`log_indented!`**: nested detail within a block, `┃   message`.
/// - **`log_pipe!`**: a single empty `┃` line for vertical spacing, used
///   before a semantic macro that opens its own block.
/// - **`log_version!`**: the `┏ astronomical vX.Y.Z ━━╸` header.
/// - **`log_end!`**: the final `╹` marker.
/// - **`log_error_exit!`**: a terminating error, `┗[ERROR] message`.
/// - **`log_debug!` .. `log_critical!`**: semantic records with a `[LEVEL]`
///   tag, filtered by the configured threshold.
pub struct Log;

impl Log {
    /// Enable or disable all output from this module.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Set the minimum level printed to stdout.
    pub fn set_level(level: Level) {
        STDOUT_LEVEL.store(level as u8, Ordering::SeqCst);
    }

    pub fn level() -> Level {
        Level::from_u8(STDOUT_LEVEL.load(Ordering::SeqCst))
    }

    /// Configure the stdout threshold from `LOG_LEVEL`.
    ///
    /// Unset keeps the quiet default of ERROR. A mistyped value falls back to
    /// DEBUG and says so.
    pub fn init_from_env() {
        Self::init_from_value(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
    }

    /// Same as [`Log::init_from_env`] with an explicit value.
    pub fn init_from_value(value: Option<&str>) {
        match value {
            None | Some("") => Self::set_level(Level::Error),
            Some(name) => match name.parse::<Level>() {
                Ok(level) => Self::set_level(level),
                Err(_) => {
                    Self::set_level(Level::Debug);
                    let names: Vec<&str> = Level::ALL.iter().map(Level::as_str).collect();
                    emit(
                        Level::Warning,
                        &format!(
                            "Mistyped {LOG_LEVEL_VAR} '{name}'; try one of {names:?}, eg. `export {LOG_LEVEL_VAR}=DEBUG`. Log level set to DEBUG."
                        ),
                    );
                }
            },
        }
    }

    /// Append records at [`FILE_LEVEL`] and above to `path`.
    ///
    /// Can only be installed once per process.
    pub fn start_file_logging(path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        LOG_FILE
            .set(Mutex::new(file))
            .map_err(|_| anyhow::anyhow!("Log file already initialized"))
    }

    /// Check whether a semantic record at `level` would reach stdout.
    pub fn enabled_for(level: Level) -> bool {
        Self::is_enabled() && level >= Self::level()
    }
}

impl LogSink for Log {
    fn record(&self, level: Level, message: &str) {
        emit(level, message);
    }
}

// Helper function to strip ANSI color codes from text
fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Skip until the terminating 'm'
                for ch in chars.by_ref() {
                    if ch == 'm' {
                        break;
                    }
                }
            } else {
                result.push(ch);
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Write decorated output to stdout.
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

fn write_file(level: Level, message: &str) {
    if level < FILE_LEVEL {
        return;
    }
    if let Some(file) = LOG_FILE.get()
        && let Ok(mut file) = file.lock()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let clean = strip_ansi_codes(message);
        let _ = writeln!(file, "{timestamp} | {:<8} | {clean}", level.as_str());
    }
}

/// Route a semantic record to stdout and the log file. Used by the macros.
pub fn emit(level: Level, message: &str) {
    if !Log::is_enabled() {
        return;
    }
    if Log::enabled_for(level) {
        let colour = level.colour();
        write_output(&format!("┣[{colour}{level}\x1b[0m] {message}\n"));
    }
    write_file(level, message);
}

// # Logging Macros

/// Log a block start message, initiating a new conceptual block of information.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃\n┣ {expr}\n"));
        }
    }};
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃   {expr}\n"));
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ astronomical v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a terminating error, `┗[ERROR] message`.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {expr}\n"));
        }
    }};
}

/// Log a debug/diagnostic message.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {{
        $crate::logger::emit($crate::logger::Level::Debug, &format!($fmt $($arg)*));
    }};
    ($expr:expr) => {{
        $crate::logger::emit($crate::logger::Level::Debug, &format!("{}", $expr));
    }};
}

/// Log an informational message.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {{
        $crate::logger::emit($crate::logger::Level::Info, &format!($fmt $($arg)*));
    }};
    ($expr:expr) => {{
        $crate::logger::emit($crate::logger::Level::Info, &format!("{}", $expr));
    }};
}

/// Log a warning message.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {{
        $crate::logger::emit($crate::logger::Level::Warning, &format!($fmt $($arg)*));
    }};
    ($expr:expr) => {{
        $crate::logger::emit($crate::logger::Level::Warning, &format!("{}", $expr));
    }};
}

/// Log an error message.
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $($arg:tt)*) => {{
        $crate::logger::emit($crate::logger::Level::Error, &format!($fmt $($arg)*));
    }};
    ($expr:expr) => {{
        $crate::logger::emit($crate::logger::Level::Error, &format!("{}", $expr));
    }};
}

/// Log a critical message.
#[macro_export]
macro_rules! log_critical {
    ($fmt:literal $($arg:tt)*) => {{
        $crate::logger::emit($crate::logger::Level::Critical, &format!($fmt $($arg)*));
    }};
    ($expr:expr) => {{
        $crate::logger::emit($crate::logger::Level::Critical, &format!("{}", $expr));
    }};
}
