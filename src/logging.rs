use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::Instant,
};

use log::{LevelFilter, SetLoggerError};

use crate::registry::Registry;

/// Routes records from the `log` facade through a [Registry], treating each
/// record's target as a namespace (with `::` rewritten to `:`)
pub struct NamespaceLogger {
    registry: Registry,
    last_logged: Mutex<HashMap<String, Instant>>,
}

impl NamespaceLogger {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            last_logged: Default::default(),
        }
    }
}

impl Default for NamespaceLogger {
    fn default() -> Self {
        Self::new(Registry::global().clone())
    }
}

pub fn namespace_of(target: &str) -> String {
    target.replace("::", ":")
}

impl log::Log for NamespaceLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.registry.enabled(&namespace_of(metadata.target()))
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let namespace = namespace_of(record.target());
        let previous = self
            .last_logged
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(namespace.clone(), Instant::now());

        // Built fresh so later Registry::configure calls apply. The sink may
        // log again, so no lock may be held while it runs.
        let mut logger = self.registry.debug(namespace);
        logger.enabled = true;
        logger.prev = Mutex::new(previous);
        logger.log_fmt(*record.args());
    }

    fn flush(&self) {
        // nop
    }
}

/// Installs a [NamespaceLogger] on the global [Registry] as the `log` logger
pub fn init() -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(NamespaceLogger::default()))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
