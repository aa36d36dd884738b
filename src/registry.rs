use std::{
    fmt::Display,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use lazy_static::lazy_static;

use crate::{
    colors::{select_color, Palette},
    formatters::Formatters,
    logger::Logger,
    patterns::{compile, Rule, RuleSet},
    sink::{self, LogFn},
};

lazy_static! {
    static ref GLOBAL: Registry = Registry::default();
}

/// What newly-created [Logger]s start out with
#[derive(Clone)]
pub struct LoggerDefaults {
    pub use_colors: bool,
    pub hide_date: bool,
    pub palette: Palette,
    pub log: LogFn,
    pub formatters: Formatters,
}

impl Default for LoggerDefaults {
    fn default() -> Self {
        Self {
            use_colors: false,
            hide_date: false,
            palette: Palette::Basic,
            log: sink::console(),
            formatters: Formatters::default(),
        }
    }
}

#[derive(Default)]
struct State {
    rules: RuleSet,
    defaults: LoggerDefaults,
}

/// Holds the active [RuleSet]. Cloning a Registry yields another handle to
/// the same state; use [Registry::global] for the process-wide instance.
#[derive(Default, Clone)]
pub struct Registry(Arc<Mutex<State>>);

impl Registry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    fn lock(&self) -> MutexGuard<State> {
        // Nothing in State can be left half-written by a panic
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the current rules with those compiled from `pattern`
    pub fn enable(&self, pattern: &str) {
        let rules = compile(pattern);
        self.lock().rules = rules;
        log::trace!(target: "nsdebug", "enabled {:?}", pattern);
    }

    /// Clears the current rules, returning a pattern that would restore them
    pub fn disable(&self) -> String {
        let rules = std::mem::take(&mut self.lock().rules);
        let pattern = rules.to_pattern();
        log::trace!(target: "nsdebug", "disabled {:?}", pattern);
        pattern
    }

    pub fn enabled(&self, namespace: &str) -> bool {
        self.lock().rules.enabled(namespace)
    }

    /// The current rules as a pattern, without clearing them
    pub fn namespaces(&self) -> String {
        self.lock().rules.to_pattern()
    }

    pub fn names(&self) -> Vec<Rule> {
        self.lock().rules.names().cloned().collect()
    }

    pub fn skips(&self) -> Vec<Rule> {
        self.lock().rules.skips().cloned().collect()
    }

    pub fn configure<F: FnOnce(&mut LoggerDefaults)>(&self, configure: F) {
        configure(&mut self.lock().defaults);
    }

    /// Creates a [Logger] for `namespace`, deciding whether it's enabled
    /// against the rules active right now
    pub fn debug<N: Display>(&self, namespace: N) -> Logger {
        let namespace = namespace.to_string();
        let (enabled, defaults) = {
            let state = self.lock();
            (state.rules.enabled(&namespace), state.defaults.clone())
        };

        Logger {
            color: select_color(&namespace, defaults.palette),
            enabled,
            log: defaults.log,
            use_colors: defaults.use_colors,
            hide_date: defaults.hide_date,
            formatters: defaults.formatters,
            namespace,
            registry: self.clone(),
            prev: Default::default(),
        }
    }
}
