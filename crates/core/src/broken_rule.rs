//! Broken business rules and their deduplicating collection.
//!
//! Validation failures are represented as data, not errors: a validator (or
//! an entity operation) records a [`BrokenRule`] per violation, and callers
//! inspect the collection afterwards.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A single violated business rule: which property broke and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenRule {
    property: String,
    message: String,
}

impl BrokenRule {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Dedup comparison: trimmed, case-insensitive on property and message.
    pub fn same_rule(&self, other: &BrokenRule) -> bool {
        eq_normalized(&self.property, &other.property)
            && eq_normalized(&self.message, &other.message)
    }
}

fn eq_normalized(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Insertion-ordered collection of broken rules with set semantics: no two
/// entries share the same (property, message) pair under the [`BrokenRule::same_rule`]
/// comparison.
#[derive(Debug, Clone, Default)]
pub struct BrokenRules {
    rules: Vec<BrokenRule>,
}

impl BrokenRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless an equal (property, message) pair is already present.
    pub fn add(&mut self, rule: BrokenRule) {
        if self.rules.iter().any(|existing| existing.same_rule(&rule)) {
            return;
        }
        self.rules.push(rule);
    }

    /// Per-element [`BrokenRules::add`]; the dedup rule holds across the whole batch.
    pub fn add_all(&mut self, rules: impl IntoIterator<Item = BrokenRule>) {
        for rule in rules {
            self.add(rule);
        }
    }

    /// Remove by value equality. No-op when absent.
    pub fn remove(&mut self, rule: &BrokenRule) {
        self.rules.retain(|existing| existing != rule);
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Order-preserving read-only view.
    pub fn broken_rules(&self) -> &[BrokenRule] {
        &self.rules
    }

    pub fn into_vec(self) -> Vec<BrokenRule> {
        self.rules
    }
}

impl fmt::Display for BrokenRules {
    /// One line per rule, `Property: {p}, Message: {m}`, newline-terminated.
    /// Empty string when there are no rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "Property: {}, Message: {}", rule.property, rule.message)?;
        }
        Ok(())
    }
}

impl IntoIterator for BrokenRules {
    type Item = BrokenRule;
    type IntoIter = std::vec::IntoIter<BrokenRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
