use std::fmt;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub mod wildcard;

lazy_static! {
    static ref TOKEN_SEPARATOR: Regex = Regex::new(r"[\s,]+").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Include,
    Exclude,
}

/// A single compiled pattern token. Exclusion rules are stored without their
/// leading `-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Rule(String);

impl Rule {
    pub fn new<T: Into<String>>(source: T) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, namespace: &str) -> bool {
        wildcard::matches(namespace, &self.0)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Rule {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    // Insertion order across both kinds; names() and skips() are views on this
    rules: Vec<(RuleKind, Rule)>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Default::default()
    }

    pub fn push(&mut self, kind: RuleKind, rule: Rule) {
        self.rules.push((kind, rule));
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &Rule> {
        self.of_kind(RuleKind::Include)
    }

    pub fn skips(&self) -> impl Iterator<Item = &Rule> {
        self.of_kind(RuleKind::Exclude)
    }

    fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, rule)| rule)
    }

    pub fn enabled(&self, namespace: &str) -> bool {
        if namespace.ends_with('*') {
            return true;
        }

        if self.skips().any(|skip| skip.matches(namespace)) {
            return false;
        }

        self.names().any(|name| name.matches(namespace))
    }

    /// Rebuilds a pattern that compiles back into an identical [RuleSet]
    pub fn to_pattern(&self) -> String {
        self.rules
            .iter()
            .map(|(kind, rule)| match kind {
                RuleKind::Include => rule.to_string(),
                RuleKind::Exclude => format!("-{}", rule),
            })
            .join(",")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern())
    }
}

impl From<&str> for RuleSet {
    fn from(pattern: &str) -> Self {
        compile(pattern)
    }
}

pub fn compile(pattern: &str) -> RuleSet {
    let mut rules = RuleSet::empty();

    for token in TOKEN_SEPARATOR.split(pattern) {
        if token.is_empty() {
            continue;
        }

        if let Some(skipped) = token.strip_prefix('-') {
            rules.push(RuleKind::Exclude, Rule::from(skipped));
        } else {
            rules.push(RuleKind::Include, Rule::from(token));
        }
    }

    rules
}
