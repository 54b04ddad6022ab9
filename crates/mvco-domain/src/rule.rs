//! Override rules and their registry
//!
//! An [`OverrideRule`] redirects one resolved class name, within one
//! component's context, to a replacement class. The [`OverrideRegistry`]
//! holds the configured rules in registration order and answers
//! per-component queries.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single class-resolution override
///
/// Field names on the wire match the host's parameter storage keys
/// (`component`, `class`, `newClass`, `newFile`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    /// Logical component identifier, e.g. `com_foo`
    pub component: String,

    /// Fully-qualified standard class name to intercept
    #[serde(rename = "class")]
    pub target_class: String,

    /// Fully-qualified class name to substitute
    #[serde(rename = "newClass")]
    pub replacement_class: String,

    /// Optional source file path to load the replacement class from.
    /// An empty path means the class is assumed already loadable.
    #[serde(rename = "newFile", default)]
    pub new_file: Option<PathBuf>,
}

impl OverrideRule {
    /// Create a rule with no explicit source file
    pub fn new(
        component: impl Into<String>,
        target_class: impl Into<String>,
        replacement_class: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            target_class: target_class.into(),
            replacement_class: replacement_class.into(),
            new_file: None,
        }
    }

    /// Set the source file path for the replacement class
    pub fn with_source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.new_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Source path to load the replacement class from, if one is needed.
    ///
    /// Returns `None` when no path is configured or the configured path is
    /// empty (the host convention for "already autoloadable").
    pub fn replacement_source(&self) -> Option<&Path> {
        self.new_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Whether this rule intercepts the given resolved class name
    pub fn matches_class(&self, class_name: &str) -> bool {
        self.target_class == class_name
    }
}

/// Ordered collection of override rules
///
/// Loaded once from configuration at plugin construction and immutable
/// thereafter. Uniqueness is not enforced; when several rules target the
/// same class on the same component, the first registered rule wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideRegistry {
    rules: Vec<OverrideRule>,
}

impl OverrideRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of rules, keeping registration order
    pub fn from_rules(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    /// Append a rule. Used while loading configuration only.
    pub fn push(&mut self, rule: OverrideRule) {
        self.rules.push(rule);
    }

    /// Rules configured for the given component, in registration order.
    ///
    /// Pure query with no failure modes; an unknown component yields an
    /// empty list.
    pub fn rules_for(&self, component_id: &str) -> Vec<OverrideRule> {
        self.rules
            .iter()
            .filter(|rule| rule.component == component_id)
            .cloned()
            .collect()
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules at all
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &OverrideRule> {
        self.rules.iter()
    }
}
