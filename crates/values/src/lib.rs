//! `groundwork-values` — ready-made value objects and validators.
//!
//! Companion to `groundwork-core`: common field types (strings, numbers,
//! timestamps, identifiers, audit trails) built on the generic
//! [`groundwork_core::ValueObject`] wrapper.

pub mod audit;
pub mod identifier;
pub mod numbers;
pub mod strings;
pub mod timestamp;
pub mod validators;

pub use audit::{Audit, AuditDef, AuditTrail, AuditTrailValidator, record_update};
pub use identifier::{Identifier, IdentifierDef, identifier_from_str, new_identifier};
pub use numbers::{Boolean, BooleanDef, Integer, IntegerDef, Numeric, NumericDef};
pub use strings::{
    BoundedString, BoundedStringDef, PlainString, PlainStringDef, RequiredString,
    RequiredStringDef,
};
pub use timestamp::{UtcTimestamp, UtcTimestampDef, now};
pub use validators::{
    StringMaxLengthValidator, StringMinLengthValidator, StringRequiredValidator,
};
