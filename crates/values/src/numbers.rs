//! Numeric and boolean value objects.

use groundwork_core::{ValueObject, ValueObjectDefinition};

pub struct IntegerDef;

impl ValueObjectDefinition for IntegerDef {
    type Value = i64;
}

pub type Integer = ValueObject<IntegerDef>;

pub struct NumericDef;

impl ValueObjectDefinition for NumericDef {
    type Value = f64;
}

pub type Numeric = ValueObject<NumericDef>;

pub struct BooleanDef;

impl ValueObjectDefinition for BooleanDef {
    type Value = bool;
}

pub type Boolean = ValueObject<BooleanDef>;
