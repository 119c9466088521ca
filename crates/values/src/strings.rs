//! Ready-made string value objects.

use groundwork_core::{RuleValidator, ValueObject, ValueObjectDefinition};

use crate::validators::{
    StringMaxLengthValidator, StringMinLengthValidator, StringRequiredValidator,
};

/// Unconstrained string. Useful when a field should still participate in
/// tracking but has no rules of its own.
pub struct PlainStringDef;

impl ValueObjectDefinition for PlainStringDef {
    type Value = String;
}

pub type PlainString = ValueObject<PlainStringDef>;

/// String that must contain at least one non-whitespace character.
pub struct RequiredStringDef;

impl ValueObjectDefinition for RequiredStringDef {
    type Value = String;

    fn validators() -> Vec<Box<dyn RuleValidator<String>>> {
        vec![Box::new(StringRequiredValidator)]
    }
}

pub type RequiredString = ValueObject<RequiredStringDef>;

/// Required string whose char length must fall within `MIN..=MAX`.
pub struct BoundedStringDef<const MIN: usize, const MAX: usize>;

impl<const MIN: usize, const MAX: usize> ValueObjectDefinition for BoundedStringDef<MIN, MAX> {
    type Value = String;

    fn validators() -> Vec<Box<dyn RuleValidator<String>>> {
        vec![
            Box::new(StringRequiredValidator),
            Box::new(StringMinLengthValidator::new(MIN)),
            Box::new(StringMaxLengthValidator::new(MAX)),
        ]
    }
}

pub type BoundedString<const MIN: usize, const MAX: usize> =
    ValueObject<BoundedStringDef<MIN, MAX>>;
