//! Who-and-when audit trail value object.

use chrono::{DateTime, Utc};
use groundwork_core::{BrokenRule, BrokenRules, RuleContext, RuleValidator, ValueObject, ValueObjectDefinition};
use serde::{Deserialize, Serialize};

/// Creation and last-update stamps. Updates are recorded through
/// [`record_update`], never by hand, so `updated_by` and `updated_at` are
/// always set together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrail {
    created_by: String,
    created_at: DateTime<Utc>,
    updated_by: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl AuditTrail {
    /// Trail stamped now by `created_by`, with no update yet.
    pub fn created_by(created_by: impl Into<String>) -> Self {
        Self {
            created_by: created_by.into(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    pub fn creator(&self) -> &str {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updater(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn with_update(mut self, updated_by: impl Into<String>) -> Self {
        self.updated_by = Some(updated_by.into());
        self.updated_at = Some(Utc::now());
        self
    }
}

/// Requires a non-blank creator, and an updater that is non-blank whenever
/// present.
pub struct AuditTrailValidator;

impl RuleValidator<AuditTrail> for AuditTrailValidator {
    fn name(&self) -> &str {
        "AuditTrail"
    }

    fn add_rules(&self, subject: &AuditTrail, _context: &RuleContext, rules: &mut BrokenRules) {
        if subject.created_by.trim().is_empty() {
            rules.add(BrokenRule::new("CreatedBy", "Value cannot be empty"));
        }
        if let Some(updated_by) = &subject.updated_by
            && updated_by.trim().is_empty()
        {
            rules.add(BrokenRule::new("UpdatedBy", "Value cannot be empty"));
        }
    }
}

pub struct AuditDef;

impl ValueObjectDefinition for AuditDef {
    type Value = AuditTrail;

    fn validators() -> Vec<Box<dyn RuleValidator<AuditTrail>>> {
        vec![Box::new(AuditTrailValidator)]
    }
}

pub type Audit = ValueObject<AuditDef>;

/// Stamp an update by `who` onto the trail. The audit ends up Dirty and
/// revalidated, like any other value change.
pub fn record_update(audit: &mut Audit, who: impl Into<String>) {
    let updated = audit.value().clone().with_update(who);
    audit.force_set_value(updated);
}
