//! Properties-bag contract for entities.

use core::fmt;

use crate::broken_rule::BrokenRule;
use crate::tracking::TrackingState;

/// A member of a props bag that participates in validation and change
/// tracking. In practice, a value-object field.
pub trait ValidatableChild {
    /// Snapshot of the child's currently broken rules.
    fn child_broken_rules(&self) -> Vec<BrokenRule>;

    /// Current tracking state of the child.
    fn tracking_state(&self) -> TrackingState;
}

/// The properties bag owned by an entity.
///
/// `validatable_children` lists the value-object fields explicitly, in a
/// fixed order, instead of discovering them at runtime. Entity validation
/// pulls broken rules from this list, and [`crate::Tracking::find_changes`]
/// derives a composite state from it.
pub trait Props: Clone + fmt::Debug {
    fn validatable_children(&self) -> Vec<&dyn ValidatableChild> {
        Vec::new()
    }
}
