//! Identity-bearing entity with props validation and change tracking.

use core::fmt;

use crate::broken_rule::{BrokenRule, BrokenRules};
use crate::domain_event::DomainEvent;
use crate::id::EntityId;
use crate::props::Props;
use crate::tracking::{Tracking, TrackingState};
use crate::validator::{RuleContext, RuleValidator, ValidatorSet};

/// Compile-time description of a concrete entity type: its props bag, the
/// validators that guard it, and optionally how past events mutate it.
pub trait EntityDefinition: Sized + 'static {
    type Props: Props;

    /// Validators registered on every instance. Default: none.
    fn validators() -> Vec<Box<dyn RuleValidator<Self::Props>>> {
        Vec::new()
    }

    /// Apply one historical event to the props. Default: ignore it.
    /// Only used by [`crate::AggregateRoot::replay`].
    fn apply(_props: &mut Self::Props, _event: &dyn DomainEvent) {}
}

/// An object with identity: two entities of the same type are the same
/// entity iff their ids match, regardless of props.
///
/// Broken rules live in two buckets. Rules recorded by hand through
/// [`Entity::add_broken_rule`] persist across validation passes; rules found
/// by validators and child value objects are recomputed from scratch on
/// every pass.
pub struct Entity<D: EntityDefinition> {
    id: EntityId,
    props: D::Props,
    validators: ValidatorSet<D::Props>,
    manual_rules: BrokenRules,
    broken_rules: BrokenRules,
    tracking: Tracking,
}

impl<D: EntityDefinition> Entity<D> {
    /// Create a brand-new entity with a fresh id. Validation runs once and
    /// the entity ends up New even when rules are broken: invalid entities
    /// are representable and report their problems via [`Entity::broken_rules`].
    pub fn create(props: D::Props) -> Self {
        let mut entity = Self::with_id(EntityId::new(), props);
        entity.validate();
        entity.tracking.mark_as_new();
        entity
    }

    /// Rehydrate an entity that already exists in storage. Starts Dirty so
    /// a later save is never mistaken for an insert.
    pub fn load(id: EntityId, props: D::Props) -> Self {
        let mut entity = Self::with_id(id, props);
        entity.validate();
        entity.tracking.mark_as_dirty();
        entity
    }

    fn with_id(id: EntityId, props: D::Props) -> Self {
        Self {
            id,
            props,
            validators: ValidatorSet::from_validators(D::validators()),
            manual_rules: BrokenRules::new(),
            broken_rules: BrokenRules::new(),
            tracking: Tracking::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn props(&self) -> &D::Props {
        &self.props
    }

    /// Direct mutable access to the props. Mutations through this reference
    /// bypass change tracking; prefer [`Entity::set_props`] when the entity
    /// should end up Dirty.
    pub fn props_mut(&mut self) -> &mut D::Props {
        &mut self.props
    }

    /// Detached copy of the props.
    pub fn props_copy(&self) -> D::Props {
        self.props.clone()
    }

    /// Replace the whole props bag and mark Dirty. Validation is deferred
    /// to the next [`Entity::validate`] or [`Entity::is_valid`] call.
    pub fn set_props(&mut self, props: D::Props) {
        self.props = props;
        self.tracking.mark_as_dirty();
    }

    /// Recompute broken rules: validator results plus every child value
    /// object's rules, merged with the manually recorded ones. Any broken
    /// rule leaves the entity Dirty.
    pub fn validate(&mut self) {
        self.validate_with(&RuleContext::new());
    }

    pub fn validate_with(&mut self, context: &RuleContext) {
        let mut rules = self.validators.broken_rules(&self.props, context);
        for child in self.props.validatable_children() {
            rules.add_all(child.child_broken_rules());
        }
        rules.add_all(self.manual_rules.clone());
        if !rules.is_empty() {
            self.tracking.mark_as_dirty();
        }
        tracing::debug!(entity_id = %self.id, broken = rules.len(), "entity validated");
        self.broken_rules = rules;
    }

    /// Validate, then report. Takes `&mut self` because validity is always
    /// judged against the current props, never a cached pass.
    pub fn is_valid(&mut self) -> bool {
        self.validate();
        self.broken_rules.is_empty()
    }

    pub fn broken_rules(&self) -> &[BrokenRule] {
        self.broken_rules.broken_rules()
    }

    /// All broken rules as one printable block, one line per rule.
    pub fn broken_rules_as_string(&self) -> String {
        self.broken_rules.to_string()
    }

    /// Record a rule by hand, e.g. from an operation that detects an
    /// invalid transition. Persists across validation passes until
    /// [`Entity::clear_broken_rules`].
    pub fn add_broken_rule(&mut self, rule: BrokenRule) {
        self.manual_rules.add(rule.clone());
        self.broken_rules.add(rule);
    }

    /// Drop every broken rule, manual ones included.
    pub fn clear_broken_rules(&mut self) {
        self.manual_rules.clear();
        self.broken_rules.clear();
    }

    /// Register an extra validator. Takes effect on the next validation
    /// pass; duplicate names are a silent no-op.
    pub fn add_validator(&mut self, validator: Box<dyn RuleValidator<D::Props>>) {
        self.validators.add(validator);
    }

    pub fn add_validators(
        &mut self,
        validators: impl IntoIterator<Item = Box<dyn RuleValidator<D::Props>>>,
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

    pub fn mark_as_clean(&mut self) {
        self.tracking.mark_as_clean();
    }

    pub fn mark_as_new(&mut self) {
        self.tracking.mark_as_new();
    }

    pub fn mark_as_dirty(&mut self) {
        self.tracking.mark_as_dirty();
    }

    /// The entity asked for its own removal.
    pub fn self_delete(&mut self) {
        self.tracking.mark_as_self_deleted();
    }

    /// Removal requested from outside, e.g. by the owning aggregate.
    pub fn delete(&mut self) {
        self.tracking.mark_as_deleted();
    }

    pub fn is_new(&self) -> bool {
        self.tracking.is_new()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracking.is_dirty()
    }

    pub fn is_deleted(&self) -> bool {
        self.tracking.is_deleted() || self.tracking.is_self_deleted()
    }

    /// Composite state derived from the child value objects, without
    /// touching the entity's own state.
    pub fn find_changes(&self) -> TrackingState {
        Tracking::find_changes(&self.props)
    }
}

/// Identity equality: same id, same entity.
impl<D: EntityDefinition> PartialEq for Entity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: EntityDefinition> Eq for Entity<D> {}

/// Structural copy keeping the same id. Post-registration validators added
/// via `add_validator` are not carried over.
impl<D: EntityDefinition> Clone for Entity<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            props: self.props.clone(),
            validators: ValidatorSet::from_validators(D::validators()),
            manual_rules: self.manual_rules.clone(),
            broken_rules: self.broken_rules.clone(),
            tracking: self.tracking,
        }
    }
}

impl<D: EntityDefinition> fmt::Debug for Entity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("tracking", &self.tracking)
            .field("broken_rules", &self.broken_rules)
            .finish()
    }
}
