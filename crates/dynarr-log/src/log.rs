use std::{
    io::Write,
    sync::{OnceLock, Mutex},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use crate::*;

use crate::fmt::SegmentSpec;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Level filters parsed from a `RUST_LOG` style string.
///
/// Accepts comma separated `level` and `target=level` entries. A bare level
/// sets the base level, the last one wins. A target listed twice keeps the
/// less verbose of its levels. Unknown levels are ignored.
#[derive(Clone, Debug)]
pub struct Filters {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filters {

    pub fn parse(env: &str) -> Self {
        let mut filters = Self::default();
        for arg in env.split(',') {
            let (target, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match target {
                Some(target) => {
                    let entry = filters.target_levels
                        .entry(CompactString::new(target))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                None => filters.base_level = level,
            }
        }
        filters
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Most specific level configured for `target`, walking up `::` paths.
    pub fn target_level(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.target_level(target)
    }
}

/// Writes `msg` laid out by `fmt`, followed by a newline.
pub fn write_fmt<W: WriteColor>(out: &mut W, fmt: &LogFmt, msg: core::fmt::Arguments) -> Result<()> {
    for segment in fmt {
        match segment {
            SegmentSpec::Message(log_spec) => {
                if let Some(color_spec) = &log_spec.color_spec {
                    out.set_color(color_spec)?;
                    write!(out, "{}", msg)?;
                    out.reset()?;
                } else {
                    write!(out, "{}", msg)?;
                }
            },
            SegmentSpec::Text(text, log_spec) => {
                if let Some(color_spec) = &log_spec.color_spec {
                    out.set_color(color_spec)?;
                    out.write_all(text.as_bytes())?;
                    out.reset()?;
                } else {
                    out.write_all(text.as_bytes())?;
                }
            },
        }
    }
    out.write_all(b"\n")?;
    Ok(())
}

struct Logger {
    stderr: StandardStream,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    filters: Filters,
}

impl Logger {

    #[inline(always)]
    fn new() -> Self {
        let filters = std::env::var("RUST_LOG")
            .map(|env| Filters::parse(&env))
            .unwrap_or_default();
        Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            error_fmt: LogFmt::labeled("ERROR", Color::Red),
            warn_fmt: LogFmt::labeled("WARN", Color::Yellow),
            info_fmt: LogFmt::labeled("INFO", Color::Green),
            debug_fmt: LogFmt::labeled("DEBUG", Color::Blue),
            trace_fmt: LogFmt::labeled("TRACE", Color::Magenta),
            filters,
        }
    }

    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.filters.enabled(target, level) {
            return Ok(false)
        }
        let fmt = match level {
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        write_fmt(&mut self.stderr, fmt, msg)?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Installs the global logger. Calling it again is a no-op.
pub fn init() {
    LOGGER.get_or_init(|| Mutex::new(Logger::new()));
}

#[inline(always)]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

fn with_fmt(level: Level, mut f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    let Some(logger) = LOGGER.get() else {
        return Ok(())
    };
    let mut logger = logger.lock().map_err(|_| LogError::Poisoned)?;
    let mut builder = LogFmtBuilder::new(logger.fmt_mut(level));
    f(&mut builder);
    Ok(())
}

#[inline(always)]
pub fn error_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_fmt(Level::Error, f)
}

#[inline(always)]
pub fn warn_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_fmt(Level::Warn, f)
}

#[inline(always)]
pub fn info_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_fmt(Level::Info, f)
}

#[inline(always)]
pub fn debug_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_fmt(Level::Debug, f)
}

#[inline(always)]
pub fn trace_fmt(f: impl FnMut(&mut LogFmtBuilder)) -> Result<()> {
    with_fmt(Level::Trace, f)
}

/// Logs through the global logger. Returns `Ok(false)` when the record was
/// filtered out or the logger was never initialized.
#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    let Some(logger) = LOGGER.get() else {
        return Ok(false)
    };
    logger
        .lock()
        .map_err(|_| LogError::Poisoned)?
        .log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
