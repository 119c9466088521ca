//! Reusable string validators.

use groundwork_core::{BrokenRule, BrokenRules, RuleContext, RuleValidator};

/// Rejects empty or whitespace-only strings.
pub struct StringRequiredValidator;

impl RuleValidator<String> for StringRequiredValidator {
    fn name(&self) -> &str {
        "StringRequired"
    }

    fn add_rules(&self, subject: &String, _context: &RuleContext, rules: &mut BrokenRules) {
        if subject.trim().is_empty() {
            rules.add(BrokenRule::new("Value", "Value cannot be empty"));
        }
    }
}

/// Rejects strings shorter than `min` characters. Length is counted in
/// chars, not bytes.
pub struct StringMinLengthValidator {
    min: usize,
}

impl StringMinLengthValidator {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl RuleValidator<String> for StringMinLengthValidator {
    fn name(&self) -> &str {
        "StringMinLength"
    }

    fn add_rules(&self, subject: &String, _context: &RuleContext, rules: &mut BrokenRules) {
        if subject.chars().count() < self.min {
            rules.add(BrokenRule::new(
                "Value",
                format!("Length cannot be less than {}", self.min),
            ));
        }
    }
}

/// Rejects strings longer than `max` characters.
pub struct StringMaxLengthValidator {
    max: usize,
}

impl StringMaxLengthValidator {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl RuleValidator<String> for StringMaxLengthValidator {
    fn name(&self) -> &str {
        "StringMaxLength"
    }

    fn add_rules(&self, subject: &String, _context: &RuleContext, rules: &mut BrokenRules) {
        if subject.chars().count() > self.max {
            rules.add(BrokenRule::new(
                "Value",
                format!("Length cannot be greater than {}", self.max),
            ));
        }
    }
}
