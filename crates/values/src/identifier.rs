//! UUID-backed identifier value object.

use groundwork_core::{DomainError, DomainResult, ValueObject, ValueObjectDefinition};
use uuid::Uuid;

pub struct IdentifierDef;

impl ValueObjectDefinition for IdentifierDef {
    type Value = Uuid;
}

pub type Identifier = ValueObject<IdentifierDef>;

/// Fresh time-ordered identifier.
pub fn new_identifier() -> Identifier {
    Identifier::create(Uuid::now_v7())
}

/// Parse an identifier from its canonical string form.
pub fn identifier_from_str(value: &str) -> DomainResult<Identifier> {
    let uuid = Uuid::parse_str(value)
        .map_err(|e| DomainError::invalid_id(format!("{value}: {e}")))?;
    Ok(Identifier::create(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_identifiers_are_unique() {
        assert_ne!(new_identifier(), new_identifier());
    }

    #[test]
    fn parse_round_trips() {
        let original = new_identifier();
        let parsed = identifier_from_str(&original.value().to_string()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn malformed_input_is_an_invalid_id_error() {
        let err = identifier_from_str("not-a-uuid").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}
