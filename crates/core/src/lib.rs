//! `groundwork-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): value objects, entities, aggregate roots, broken-rule
//! validation, change tracking, domain events and enumerations.

pub mod aggregate;
pub mod broken_rule;
pub mod domain_event;
pub mod entity;
pub mod enumeration;
pub mod error;
pub mod id;
pub mod props;
pub mod tracking;
pub mod validator;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use broken_rule::{BrokenRule, BrokenRules};
pub use domain_event::{DomainEvent, DomainEvents, EventRecord};
pub use entity::{Entity, EntityDefinition};
pub use enumeration::Enumeration;
pub use error::{DomainError, DomainResult};
pub use id::{EntityId, EventId};
pub use props::{Props, ValidatableChild};
pub use tracking::{Tracking, TrackingState};
pub use validator::{RuleContext, RuleValidator, ValidatorSet};
pub use value_object::{ValueObject, ValueObjectDefinition};
