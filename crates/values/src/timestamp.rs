//! UTC timestamp value object.

use chrono::{DateTime, Utc};
use groundwork_core::{ValueObject, ValueObjectDefinition};

/// Instant in UTC. The wrapped type already forbids non-UTC offsets, so no
/// validator is needed.
pub struct UtcTimestampDef;

impl ValueObjectDefinition for UtcTimestampDef {
    type Value = DateTime<Utc>;
}

pub type UtcTimestamp = ValueObject<UtcTimestampDef>;

/// Timestamp for the current instant.
pub fn now() -> UtcTimestamp {
    UtcTimestamp::create(Utc::now())
}
