//! Named validation rules bound to a subject type.

use core::fmt;

use serde_json::Value;

use crate::broken_rule::{BrokenRule, BrokenRules};

/// Ambient parameters handed to validators during a validation pass.
///
/// Most validators ignore it; it exists for rules that depend on data the
/// subject does not carry (e.g. a tenant setting).
#[derive(Debug, Clone, Default)]
pub struct RuleContext {
    params: Vec<(String, Value)>,
}

impl RuleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a named parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some(existing) = self.params.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.params.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// A named unit of validation logic for subjects of type `S`.
///
/// Validators are stateless: violations found during a pass go straight into
/// the caller-owned [`BrokenRules`], so repeated passes over a now-valid
/// subject yield zero rules rather than a stale set.
pub trait RuleValidator<S> {
    /// Identity used for deduplication inside a [`ValidatorSet`].
    fn name(&self) -> &str;

    /// Inspect `subject` and record every violated rule.
    fn add_rules(&self, subject: &S, context: &RuleContext, rules: &mut BrokenRules);
}

/// Registration-ordered set of validators holding at most one validator per
/// trimmed, case-insensitive name. Duplicate registration is a silent no-op.
pub struct ValidatorSet<S> {
    validators: Vec<Box<dyn RuleValidator<S>>>,
}

impl<S> ValidatorSet<S> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn from_validators(validators: Vec<Box<dyn RuleValidator<S>>>) -> Self {
        let mut set = Self::new();
        set.add_all(validators);
        set
    }

    pub fn add(&mut self, validator: Box<dyn RuleValidator<S>>) {
        if self.contains(validator.name()) {
            return;
        }
        self.validators.push(validator);
    }

    pub fn add_all(&mut self, validators: impl IntoIterator<Item = Box<dyn RuleValidator<S>>>) {
        for validator in validators {
            self.add(validator);
        }
    }

    /// Remove the validator registered under `name`. No-op when absent.
    pub fn remove(&mut self, name: &str) {
        self.validators
            .retain(|v| !same_name(v.name(), name));
    }

    pub fn clear(&mut self) {
        self.validators.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.iter().any(|v| same_name(v.name(), name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Run every validator in registration order and merge the results,
    /// deduplicated the same way [`BrokenRules`] deduplicates.
    pub fn broken_rules(&self, subject: &S, context: &RuleContext) -> BrokenRules {
        let mut rules = BrokenRules::new();
        for validator in &self.validators {
            let before = rules.len();
            validator.add_rules(subject, context, &mut rules);
            tracing::trace!(
                validator = validator.name(),
                found = rules.len() - before,
                "validator pass"
            );
        }
        rules
    }
}

impl<S> Default for ValidatorSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ValidatorSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.validators.iter().map(|v| v.name()))
            .finish()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotBlank;

    impl RuleValidator<String> for NotBlank {
        fn name(&self) -> &str {
            "NotBlank"
        }

        fn add_rules(&self, subject: &String, _context: &RuleContext, rules: &mut BrokenRules) {
            if subject.trim().is_empty() {
                rules.add(BrokenRule::new("Value", "Value cannot be empty"));
            }
        }
    }

    struct MaxLen(usize);

    impl RuleValidator<String> for MaxLen {
        fn name(&self) -> &str {
            "MaxLen"
        }

        fn add_rules(&self, subject: &String, _context: &RuleContext, rules: &mut BrokenRules) {
            if subject.chars().count() > self.0 {
                rules.add(BrokenRule::new(
                    "Value",
                    format!("Length cannot be greater than {}", self.0),
                ));
            }
        }
    }

    /// Same rule as NotBlank under a different registered name.
    struct NotBlankAgain;

    impl RuleValidator<String> for NotBlankAgain {
        fn name(&self) -> &str {
            "NotBlankAgain"
        }

        fn add_rules(&self, subject: &String, context: &RuleContext, rules: &mut BrokenRules) {
            NotBlank.add_rules(subject, context, rules);
        }
    }

    #[test]
    fn duplicate_registration_is_a_silent_no_op() {
        let mut set = ValidatorSet::new();
        set.add(Box::new(NotBlank));
        set.add(Box::new(NotBlank));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn names_are_compared_trimmed_and_case_insensitively() {
        let mut set: ValidatorSet<String> = ValidatorSet::new();
        set.add(Box::new(NotBlank));
        assert!(set.contains("  notblank "));
        set.remove("NOTBLANK");
        assert!(set.is_empty());
    }

    #[test]
    fn broken_rules_runs_validators_in_registration_order() {
        let mut set = ValidatorSet::new();
        set.add(Box::new(MaxLen(3)));
        set.add(Box::new(NotBlank));
        let rules = set.broken_rules(&"too long for three".to_string(), &RuleContext::new());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.broken_rules()[0].message(), "Length cannot be greater than 3");
    }

    #[test]
    fn identical_rules_from_different_validators_are_merged() {
        let mut set = ValidatorSet::new();
        set.add(Box::new(NotBlank));
        set.add(Box::new(NotBlankAgain));
        assert_eq!(set.len(), 2);
        let rules = set.broken_rules(&"   ".to_string(), &RuleContext::new());
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn revalidating_a_valid_subject_yields_zero_rules() {
        let mut set = ValidatorSet::new();
        set.add(Box::new(NotBlank));
        assert_eq!(set.broken_rules(&String::new(), &RuleContext::new()).len(), 1);
        assert!(set.broken_rules(&"ok".to_string(), &RuleContext::new()).is_empty());
        assert!(set.broken_rules(&"ok".to_string(), &RuleContext::new()).is_empty());
    }

    #[test]
    fn context_parameters_replace_by_name() {
        let mut context = RuleContext::new();
        context.insert("max", serde_json::json!(3));
        context.insert("max", serde_json::json!(5));
        assert_eq!(context.get("max"), Some(&serde_json::json!(5)));
        assert_eq!(context.get("missing"), None);
    }
}
