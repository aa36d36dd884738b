//! Namespaced debug logging. A [Logger] only writes when its namespace is
//! enabled by the active pattern, eg `DEBUG=app:*,-app:noisy`.
//!
//! ```
//! nsdebug::enable("app:*,-app:noisy");
//!
//! let log = nsdebug::debug("app:net");
//! assert!(log.enabled);
//! assert!(log.extend_default("tcp").enabled);
//! assert!(!nsdebug::debug("app:noisy").enabled);
//! assert!(!nsdebug::enabled("other"));
//!
//! assert_eq!(nsdebug::disable(), "app:*,-app:noisy");
//! ```

use std::fmt::Display;

pub mod colors;
pub mod config;
pub mod formatters;
pub mod humanize;
pub mod logger;
pub mod logging;
pub mod patterns;
pub mod registry;
pub mod sink;

pub use logger::Logger;
pub use patterns::{compile, Rule, RuleSet};
pub use registry::Registry;

/// Enables namespaces on the global [Registry], replacing any enabled before
pub fn enable(pattern: &str) {
    Registry::global().enable(pattern)
}

/// Disables all namespaces on the global [Registry], returning the pattern
/// that was active
pub fn disable() -> String {
    Registry::global().disable()
}

/// Whether `namespace` is enabled by the global [Registry]'s current rules
pub fn enabled(namespace: &str) -> bool {
    Registry::global().enabled(namespace)
}

/// Creates a [Logger] on the global [Registry]
pub fn debug<N: Display>(namespace: N) -> Logger {
    Registry::global().debug(namespace)
}

/// A snapshot of the global [Registry]'s inclusion rules, in pattern order
pub fn names() -> Vec<Rule> {
    Registry::global().names()
}

/// A snapshot of the global [Registry]'s exclusion rules, in pattern order
pub fn skips() -> Vec<Rule> {
    Registry::global().skips()
}
