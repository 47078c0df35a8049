//! Filter comparators and the rules for pairing them with field values.
//!
//! Which comparators make sense for a filter depends on the shape of the
//! value being compared against. Values are classified structurally into a
//! [`FieldClass`], and each class carries a fixed set of admissible
//! comparators. Classification never fails and never panics; values that
//! fit no class are [`FieldClass::Unclassified`] and admit nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// A filter comparison operator.
///
/// Serialized in SCREAMING_SNAKE_CASE, matching the store's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Comparator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    Near,
    NotNear,
    Contains,
    NotContains,
    ContainsAllTokens,
    ContainsAnyTokens,
    NotContainsAllTokens,
    NotContainsAnyTokens,
    In,
    NotIn,
    ContainsAll,
    ContainsAny,
    NotContainsAll,
    NotContainsAny,
    ListContains,
    ListNotContains,
    ListContainsAll,
    ListContainsAny,
    ListNotContainsAll,
    ListNotContainsAny,
    StartsWith,
    NotStartsWith,
    EndsWith,
    NotEndsWith,
    Like,
    NotLike,
    Matches,
    NotMatches,
}

impl Comparator {
    /// Every comparator, in wire-definition order.
    pub const ALL: [Comparator; 34] = [
        Comparator::Equals,
        Comparator::NotEquals,
        Comparator::LessThan,
        Comparator::LessThanOrEquals,
        Comparator::GreaterThan,
        Comparator::GreaterThanOrEquals,
        Comparator::Near,
        Comparator::NotNear,
        Comparator::Contains,
        Comparator::NotContains,
        Comparator::ContainsAllTokens,
        Comparator::ContainsAnyTokens,
        Comparator::NotContainsAllTokens,
        Comparator::NotContainsAnyTokens,
        Comparator::In,
        Comparator::NotIn,
        Comparator::ContainsAll,
        Comparator::ContainsAny,
        Comparator::NotContainsAll,
        Comparator::NotContainsAny,
        Comparator::ListContains,
        Comparator::ListNotContains,
        Comparator::ListContainsAll,
        Comparator::ListContainsAny,
        Comparator::ListNotContainsAll,
        Comparator::ListNotContainsAny,
        Comparator::StartsWith,
        Comparator::NotStartsWith,
        Comparator::EndsWith,
        Comparator::NotEndsWith,
        Comparator::Like,
        Comparator::NotLike,
        Comparator::Matches,
        Comparator::NotMatches,
    ];

    /// The comparator's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equals => "EQUALS",
            Comparator::NotEquals => "NOT_EQUALS",
            Comparator::LessThan => "LESS_THAN",
            Comparator::LessThanOrEquals => "LESS_THAN_OR_EQUALS",
            Comparator::GreaterThan => "GREATER_THAN",
            Comparator::GreaterThanOrEquals => "GREATER_THAN_OR_EQUALS",
            Comparator::Near => "NEAR",
            Comparator::NotNear => "NOT_NEAR",
            Comparator::Contains => "CONTAINS",
            Comparator::NotContains => "NOT_CONTAINS",
            Comparator::ContainsAllTokens => "CONTAINS_ALL_TOKENS",
            Comparator::ContainsAnyTokens => "CONTAINS_ANY_TOKENS",
            Comparator::NotContainsAllTokens => "NOT_CONTAINS_ALL_TOKENS",
            Comparator::NotContainsAnyTokens => "NOT_CONTAINS_ANY_TOKENS",
            Comparator::In => "IN",
            Comparator::NotIn => "NOT_IN",
            Comparator::ContainsAll => "CONTAINS_ALL",
            Comparator::ContainsAny => "CONTAINS_ANY",
            Comparator::NotContainsAll => "NOT_CONTAINS_ALL",
            Comparator::NotContainsAny => "NOT_CONTAINS_ANY",
            Comparator::ListContains => "LIST_CONTAINS",
            Comparator::ListNotContains => "LIST_NOT_CONTAINS",
            Comparator::ListContainsAll => "LIST_CONTAINS_ALL",
            Comparator::ListContainsAny => "LIST_CONTAINS_ANY",
            Comparator::ListNotContainsAll => "LIST_NOT_CONTAINS_ALL",
            Comparator::ListNotContainsAny => "LIST_NOT_CONTAINS_ANY",
            Comparator::StartsWith => "STARTS_WITH",
            Comparator::NotStartsWith => "NOT_STARTS_WITH",
            Comparator::EndsWith => "ENDS_WITH",
            Comparator::NotEndsWith => "NOT_ENDS_WITH",
            Comparator::Like => "LIKE",
            Comparator::NotLike => "NOT_LIKE",
            Comparator::Matches => "MATCHES",
            Comparator::NotMatches => "NOT_MATCHES",
        }
    }

    /// Check whether this comparator is admissible for the given field value.
    ///
    /// The value is classified structurally; the comparator must be a member
    /// of the resulting class's admissible set. Values that fit no class
    /// reject every comparator.
    pub fn is_valid_for(&self, value: &Value) -> bool {
        FieldClass::of(value).admits(*self)
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown comparator name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comparator: {0}")]
pub struct ParseComparatorError(pub String);

impl FromStr for Comparator {
    type Err = ParseComparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseComparatorError(s.to_string()))
    }
}

/// Comparators admissible for string-classified values.
const STRING_COMPARATORS: &[Comparator] = &[
    Comparator::Equals,
    Comparator::NotEquals,
    Comparator::Contains,
    Comparator::NotContains,
    Comparator::ContainsAllTokens,
    Comparator::ContainsAnyTokens,
    Comparator::NotContainsAllTokens,
    Comparator::NotContainsAnyTokens,
    Comparator::StartsWith,
    Comparator::NotStartsWith,
    Comparator::EndsWith,
    Comparator::NotEndsWith,
    Comparator::Like,
    Comparator::NotLike,
    Comparator::Matches,
    Comparator::NotMatches,
];

/// Comparators admissible for number-classified values.
const NUMBER_COMPARATORS: &[Comparator] = &[
    Comparator::Equals,
    Comparator::NotEquals,
    Comparator::LessThan,
    Comparator::LessThanOrEquals,
    Comparator::GreaterThan,
    Comparator::GreaterThanOrEquals,
];

/// Comparators admissible for boolean-classified values.
const BOOLEAN_COMPARATORS: &[Comparator] = &[Comparator::Equals, Comparator::NotEquals];

/// Comparators admissible for location-classified values.
const LOCATION_COMPARATORS: &[Comparator] = &[
    Comparator::Equals,
    Comparator::NotEquals,
    Comparator::Near,
    Comparator::NotNear,
];

/// Comparators admissible for list-classified values.
const LIST_COMPARATORS: &[Comparator] = &[
    Comparator::Equals,
    Comparator::NotEquals,
    Comparator::In,
    Comparator::NotIn,
    Comparator::ContainsAll,
    Comparator::ContainsAny,
    Comparator::NotContainsAll,
    Comparator::NotContainsAny,
    Comparator::ListContains,
    Comparator::ListNotContains,
    Comparator::ListContainsAll,
    Comparator::ListContainsAny,
    Comparator::ListNotContainsAll,
    Comparator::ListNotContainsAny,
];

/// Structurally inferred class of a field value.
///
/// Classification inspects the concrete JSON shape, not a declared schema.
/// Objects carrying both `latitude` and `longitude` keys are locations no
/// matter what else they carry; arrays and objects with a truthy `strings`
/// or `references` member are lists. Anything else fits no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldClass {
    String,
    Number,
    Boolean,
    Location,
    List,
    Unclassified,
}

impl FieldClass {
    /// Classify a field value.
    ///
    /// Checks run in a fixed priority order; the location check wins over
    /// the list check for objects carrying both shapes.
    pub fn of(value: &Value) -> FieldClass {
        match value {
            Value::String(_) => FieldClass::String,
            Value::Number(_) => FieldClass::Number,
            Value::Bool(_) => FieldClass::Boolean,
            Value::Array(_) => FieldClass::List,
            Value::Object(map) => {
                // Key presence only; the coordinate values are not inspected.
                if map.contains_key("latitude") && map.contains_key("longitude") {
                    FieldClass::Location
                } else if map.get("strings").is_some_and(is_truthy)
                    || map.get("references").is_some_and(is_truthy)
                {
                    FieldClass::List
                } else {
                    FieldClass::Unclassified
                }
            }
            Value::Null => FieldClass::Unclassified,
        }
    }

    /// The admissible comparator set for this class.
    pub fn admissible(&self) -> &'static [Comparator] {
        match self {
            FieldClass::String => STRING_COMPARATORS,
            FieldClass::Number => NUMBER_COMPARATORS,
            FieldClass::Boolean => BOOLEAN_COMPARATORS,
            FieldClass::Location => LOCATION_COMPARATORS,
            FieldClass::List => LIST_COMPARATORS,
            FieldClass::Unclassified => &[],
        }
    }

    /// Check whether the class admits a comparator.
    pub fn admits(&self, comparator: Comparator) -> bool {
        self.admissible().contains(&comparator)
    }
}

impl std::fmt::Display for FieldClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldClass::String => write!(f, "String"),
            FieldClass::Number => write!(f, "Number"),
            FieldClass::Boolean => write!(f, "Boolean"),
            FieldClass::Location => write!(f, "Location"),
            FieldClass::List => write!(f, "List"),
            FieldClass::Unclassified => write!(f, "Unclassified"),
        }
    }
}

/// Truthiness of a JSON value, matching the store's scripting-layer rules:
/// null, false, zero, and the empty string are falsy; empty arrays and
/// objects are truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
