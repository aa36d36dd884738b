use std::{collections::BTreeMap, env};

use serde::Serialize;

use crate::{
    colors::{stderr_supports_color, Palette},
    registry::Registry,
};

pub const NAMESPACES_VAR: &str = "DEBUG";
const OPTION_PREFIX: &str = "DEBUG_";

/// Logger configuration read from `DEBUG` and `DEBUG_*` environment vars
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Options {
    pub namespaces: Option<String>,

    /// `DEBUG_COLORS`; `None` means detect from the terminal
    pub colors: Option<bool>,

    /// `DEBUG_HIDE_DATE`
    pub hide_date: bool,

    /// Every `DEBUG_*` var, keyed by its camelCased suffix (eg: `hideDate`)
    pub inspect: BTreeMap<String, String>,
}

impl Options {
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Options::default();

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key == NAMESPACES_VAR {
                options.namespaces = Some(value.to_string());
                continue;
            }

            let suffix = match key.strip_prefix(OPTION_PREFIX) {
                Some(suffix) if !suffix.is_empty() => suffix,
                _ => continue,
            };

            let name = camel_case(suffix);
            match name.as_str() {
                "colors" => options.colors = parse_bool(value),
                "hideDate" => options.hide_date = parse_bool(value).unwrap_or(false),
                _ => {}
            }
            options.inspect.insert(name, value.to_string());
        }

        options
    }

    pub fn use_colors(&self) -> bool {
        self.colors.unwrap_or_else(stderr_supports_color)
    }

    /// Applies these options to `registry`, enabling its namespaces
    pub fn apply(&self, registry: &Registry) {
        let use_colors = self.use_colors();
        let hide_date = self.hide_date;
        registry.configure(|defaults| {
            defaults.use_colors = use_colors;
            defaults.hide_date = hide_date;
            defaults.palette = if use_colors {
                Palette::detect()
            } else {
                Palette::Basic
            };
        });
        registry.enable(self.namespaces.as_deref().unwrap_or_default());
    }
}

/// Configures the global [Registry] from the environment, writing the
/// canonical pattern back to `DEBUG` for child processes. Call once, at
/// startup.
pub fn init() -> Options {
    let options = Options::from_env();
    let registry = Registry::global();
    options.apply(registry);

    let namespaces = registry.namespaces();
    if load().as_deref() != Some(namespaces.as_str()) {
        save(&namespaces);
    }
    options
}

/// The namespaces pattern currently in the environment, if any
pub fn load() -> Option<String> {
    env::var(NAMESPACES_VAR).ok()
}

/// Persists `namespaces` so child processes inherit it
pub fn save(namespaces: &str) {
    if namespaces.is_empty() {
        env::remove_var(NAMESPACES_VAR);
    } else {
        env::set_var(NAMESPACES_VAR, namespaces);
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    for truthy in ["yes", "on", "true", "enabled"] {
        if value.eq_ignore_ascii_case(truthy) {
            return Some(true);
        }
    }
    for falsy in ["no", "off", "false", "disabled"] {
        if value.eq_ignore_ascii_case(falsy) {
            return Some(false);
        }
    }

    value.parse::<f64>().ok().map(|n| n != 0.0)
}

fn camel_case(suffix: &str) -> String {
    let mut name = String::with_capacity(suffix.len());
    let mut upper_next = false;
    for ch in suffix.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            name.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            name.push(ch.to_ascii_lowercase());
        }
    }
    name
}
