//! Change-tracking state for entities and value objects.

use serde::{Deserialize, Serialize};

use crate::props::Props;

/// The five mutually exclusive tracking states.
///
/// A sum type makes the "exactly one flag holds" invariant structural: there
/// is no flag combination to keep consistent.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingState {
    #[default]
    Clean,
    New,
    Dirty,
    SelfDeleted,
    Deleted,
}

impl TrackingState {
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty)
    }

    pub fn is_self_deleted(&self) -> bool {
        matches!(self, Self::SelfDeleted)
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// Tracking-state holder with explicit `mark_as_*` transitions.
///
/// Every transition is a total overwrite and no transition is rejected:
/// the machine is deliberately permissive, with no terminal state.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    state: TrackingState,
}

impl Tracking {
    /// Starts Clean.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_clean(&self) -> bool {
        self.state.is_clean()
    }

    pub fn is_new(&self) -> bool {
        self.state.is_new()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn is_self_deleted(&self) -> bool {
        self.state.is_self_deleted()
    }

    pub fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }

    pub fn mark_as_clean(&mut self) {
        self.state = TrackingState::Clean;
    }

    pub fn mark_as_new(&mut self) {
        self.state = TrackingState::New;
    }

    pub fn mark_as_dirty(&mut self) {
        self.state = TrackingState::Dirty;
    }

    pub fn mark_as_self_deleted(&mut self) {
        self.state = TrackingState::SelfDeleted;
    }

    pub fn mark_as_deleted(&mut self) {
        self.state = TrackingState::Deleted;
    }

    /// Derive a state from the tracking of every child value object in
    /// `props`.
    ///
    /// Flags are checked per child in the order dirty, new, self-deleted,
    /// deleted and applied unconditionally, without short-circuiting: a
    /// later child in the declaration order silently overrides an earlier
    /// one. Children all Clean (or no children) yields Clean.
    pub fn find_changes<P: Props>(props: &P) -> TrackingState {
        let mut state = TrackingState::Clean;
        for child in props.validatable_children() {
            let child_state = child.tracking_state();
            if child_state.is_dirty() {
                state = TrackingState::Dirty;
            }
            if child_state.is_new() {
                state = TrackingState::New;
            }
            if child_state.is_self_deleted() {
                state = TrackingState::SelfDeleted;
            }
            if child_state.is_deleted() {
                state = TrackingState::Deleted;
            }
        }
        state
    }
}
