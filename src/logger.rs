use std::{
    fmt,
    sync::{Mutex, PoisonError},
    time::Instant,
};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    colors::Color, formatters::Formatters, humanize::humanize, registry::Registry, sink::LogFn,
};

pub const DEFAULT_DELIMITER: &str = ":";

/// A namespaced debug logger. Create one with [Registry::debug] or
/// [crate::debug]; whether it is [enabled](Logger::enabled) is decided once,
/// at creation, and may be reassigned freely afterward.
pub struct Logger {
    pub namespace: String,
    pub enabled: bool,
    pub log: LogFn,
    pub use_colors: bool,
    pub color: Color,
    pub hide_date: bool,
    pub formatters: Formatters,

    pub(crate) registry: Registry,
    pub(crate) prev: Mutex<Option<Instant>>,
}

impl Logger {
    /// Creates a child logger named `{namespace}{delimiter}{suffix}`, sharing
    /// this logger's output and decoration settings
    pub fn extend<S: fmt::Display>(&self, suffix: S, delimiter: &str) -> Logger {
        let namespace = format!("{}{}{}", self.namespace, delimiter, suffix);
        Logger {
            enabled: self.registry.enabled(&namespace),
            namespace,
            log: self.log.clone(),
            use_colors: self.use_colors,
            color: self.color,
            hide_date: self.hide_date,
            formatters: self.formatters.clone(),
            registry: self.registry.clone(),
            prev: Default::default(),
        }
    }

    /// [Logger::extend] using the `:` delimiter
    pub fn extend_default<S: fmt::Display>(&self, suffix: S) -> Logger {
        self.extend(suffix, DEFAULT_DELIMITER)
    }

    /// Formats `args` through [Formatters] and writes the result, if enabled
    pub fn call(&self, args: &[Value]) {
        if !self.enabled {
            return;
        }

        let message = self.formatters.format(args);
        self.emit(&message);
    }

    /// Writes a pre-formatted message, if enabled. See also [crate::debug!]
    pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }

        self.emit(&args.to_string());
    }

    fn emit(&self, message: &str) {
        let diff = self.tick();
        let line = self.decorate(message, diff);
        (self.log)(&line);
    }

    /// Milliseconds since this logger last wrote anything
    fn tick(&self) -> i64 {
        let now = Instant::now();
        let mut prev = self.prev.lock().unwrap_or_else(PoisonError::into_inner);
        let diff = prev.map_or(0, |prev| now.duration_since(prev).as_millis() as i64);
        *prev = Some(now);
        diff
    }

    fn decorate(&self, message: &str, diff: i64) -> String {
        if self.use_colors {
            let escape = self.color.escape();
            let prefix = format!("  {};1m{} \x1b[0m", escape, self.namespace);
            let body = message.replace('\n', &format!("\n{}", prefix));
            format!("{}{} {}m+{}\x1b[0m", prefix, body, escape, humanize(diff))
        } else if self.hide_date {
            format!("{} {}", self.namespace, message)
        } else {
            let date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            format!("{} {} {}", date, self.namespace, message)
        }
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Logger {
            namespace: self.namespace.clone(),
            enabled: self.enabled,
            log: self.log.clone(),
            use_colors: self.use_colors,
            color: self.color,
            hide_date: self.hide_date,
            formatters: self.formatters.clone(),
            registry: self.registry.clone(),
            prev: Default::default(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.namespace)
            .field("enabled", &self.enabled)
            .field("use_colors", &self.use_colors)
            .field("color", &self.color)
            .field("hide_date", &self.hide_date)
            .finish_non_exhaustive()
    }
}

/// Logs through a [Logger] using Rust formatting, skipping the formatting
/// work entirely when the logger is disabled.
///
/// ```
/// let log = nsdebug::debug("app:startup");
/// nsdebug::debug!(log, "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        if $logger.enabled {
            $logger.log_fmt(format_args!($($arg)+));
        }
    };
}
