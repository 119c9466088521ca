//! Value object wrapper: one value, its validators, its tracking state.
//!
//! Value objects have no identity: they are defined entirely by their
//! value. Two instances of the same concrete type are equal iff their
//! wrapped values compare equal; instances of different concrete types can
//! never be compared at all, which the type system enforces for free.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::broken_rule::{BrokenRule, BrokenRules};
use crate::props::ValidatableChild;
use crate::tracking::{Tracking, TrackingState};
use crate::validator::{RuleContext, RuleValidator, ValidatorSet};

/// Compile-time description of a concrete value-object type: the wrapped
/// value and the validators that guard it.
///
/// ```ignore
/// struct NameDef;
///
/// impl ValueObjectDefinition for NameDef {
///     type Value = String;
///
///     fn validators() -> Vec<Box<dyn RuleValidator<String>>> {
///         vec![Box::new(StringRequiredValidator)]
///     }
/// }
///
/// type Name = ValueObject<NameDef>;
/// ```
pub trait ValueObjectDefinition: Sized + 'static {
    type Value: Clone + PartialEq + fmt::Debug;

    /// Validators registered on every instance. Default: none.
    fn validators() -> Vec<Box<dyn RuleValidator<Self::Value>>> {
        Vec::new()
    }
}

/// Wrapper around a single value of `D::Value`, accessed only through
/// [`ValueObject::value`]/[`ValueObject::set_value`] so every change marks
/// the object Dirty and re-runs validation.
pub struct ValueObject<D: ValueObjectDefinition> {
    value: D::Value,
    validators: ValidatorSet<D::Value>,
    broken_rules: BrokenRules,
    tracking: Tracking,
}

impl<D: ValueObjectDefinition> ValueObject<D> {
    /// Create a new instance: tracking starts at New and one validation
    /// pass runs immediately, so broken rules are observable straight after
    /// construction.
    pub fn create(value: D::Value) -> Self {
        let mut vo = Self {
            value,
            validators: ValidatorSet::from_validators(D::validators()),
            broken_rules: BrokenRules::new(),
            tracking: Tracking::new(),
        };
        vo.tracking.mark_as_new();
        vo.validate();
        vo
    }

    /// Rehydrate from persisted state. Same construction path as
    /// [`ValueObject::create`], including the New tracking state.
    pub fn load(value: D::Value) -> Self {
        Self::create(value)
    }

    pub fn value(&self) -> &D::Value {
        &self.value
    }

    /// Replace the wrapped value.
    ///
    /// Setting a value equal to the current one is a no-op: no state change,
    /// no re-validation. A differing value marks the object Dirty and
    /// re-runs every registered validator against the new value.
    pub fn set_value(&mut self, value: D::Value) {
        if self.value == value {
            return;
        }
        self.apply_value(value);
    }

    /// Replace the wrapped value even when it compares equal to the current
    /// one. Still marks Dirty and re-validates.
    pub fn force_set_value(&mut self, value: D::Value) {
        self.apply_value(value);
    }

    fn apply_value(&mut self, value: D::Value) {
        self.value = value;
        self.tracking.mark_as_dirty();
        self.validate();
        tracing::trace!(broken = self.broken_rules.len(), "value object changed");
    }

    /// True iff the last validation pass found no broken rules.
    pub fn is_valid(&self) -> bool {
        self.broken_rules.is_empty()
    }

    /// Clear and re-aggregate broken rules from every registered validator.
    pub fn validate(&mut self) {
        self.validate_with(&RuleContext::new());
    }

    pub fn validate_with(&mut self, context: &RuleContext) {
        self.broken_rules = self.validators.broken_rules(&self.value, context);
    }

    pub fn broken_rules(&self) -> &[BrokenRule] {
        self.broken_rules.broken_rules()
    }

    /// Register an extra validator. Takes effect on the next validation
    /// pass; duplicate names are a silent no-op.
    pub fn add_validator(&mut self, validator: Box<dyn RuleValidator<D::Value>>) {
        self.validators.add(validator);
    }

    pub fn add_validators(
        &mut self,
        validators: impl IntoIterator<Item = Box<dyn RuleValidator<D::Value>>>,
    ) {
        self.validators.add_all(validators);
    }

    pub fn remove_validator(&mut self, name: &str) {
        self.validators.remove(name);
    }

    pub fn validator_names(&self) -> Vec<&str> {
        self.validators.names()
    }

    pub fn tracking(&self) -> Tracking {
        self.tracking
    }

    pub fn tracking_mut(&mut self) -> &mut Tracking {
        &mut self.tracking
    }
}

impl<D: ValueObjectDefinition> ValidatableChild for ValueObject<D> {
    fn child_broken_rules(&self) -> Vec<BrokenRule> {
        self.broken_rules.broken_rules().to_vec()
    }

    fn tracking_state(&self) -> TrackingState {
        self.tracking.state()
    }
}

/// Structural copy of the wrapper. Post-registration validators added via
/// `add_validator` are not carried over; the clone starts from the
/// definition's validator set again.
impl<D: ValueObjectDefinition> Clone for ValueObject<D> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            validators: ValidatorSet::from_validators(D::validators()),
            broken_rules: self.broken_rules.clone(),
            tracking: self.tracking,
        }
    }
}

impl<D: ValueObjectDefinition> PartialEq for ValueObject<D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D: ValueObjectDefinition> Eq for ValueObject<D> where D::Value: Eq {}

impl<D: ValueObjectDefinition> Hash for ValueObject<D>
where
    D::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<D: ValueObjectDefinition> fmt::Debug for ValueObject<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueObject")
            .field("value", &self.value)
            .field("tracking", &self.tracking)
            .field("broken_rules", &self.broken_rules)
            .finish()
    }
}

impl<D: ValueObjectDefinition> fmt::Display for ValueObject<D>
where
    D::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Serializes transparently as the wrapped value, so a mapping layer can
/// treat value objects as plain data.
impl<D: ValueObjectDefinition> Serialize for ValueObject<D>
where
    D::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Deserializing goes through [`ValueObject::create`], so the instance comes
/// back New and validated.
impl<'de, D: ValueObjectDefinition> Deserialize<'de> for ValueObject<D>
where
    D::Value: Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        Ok(Self::create(D::Value::deserialize(deserializer)?))
    }
}
