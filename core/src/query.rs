//! Query descriptors and the fluent builder that produces them.
//!
//! A query targets one record type and carries filters (implicit AND, in
//! insertion order), sort directives (multi-key, first directive highest
//! priority), an optional result ceiling, and an optional field
//! projection. The serialized descriptor is the exact payload the store's
//! query operation expects, so its field names are part of the wire
//! contract.
//!
//! The builder accepts any comparator/value pairing without checking it
//! against [`Comparator::is_valid_for`]; the store rejects nonsense
//! pairings server-side, and callers that want an early check can run the
//! validator themselves.

use crate::{Comparator, FieldName, Location, RecordType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One filter predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Field the predicate applies to
    pub field_name: FieldName,
    /// Comparison operator
    pub comparator: Comparator,
    /// Value to compare against
    pub field_value: Value,
}

/// One sort directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    /// Field to sort by
    pub field_name: FieldName,
    /// Sort direction (true for ascending)
    pub ascending: bool,
}

/// An immutable query descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Record type to query (required)
    pub record_type: RecordType,
    /// Filters, combined with implicit AND in insertion order
    #[serde(default)]
    pub filter_by: Vec<Filter>,
    /// Sort directives, first directive highest priority
    #[serde(default)]
    pub sort_by: Vec<Sort>,
    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_limit: Option<u32>,
    /// Fields to materialize in results; all fields when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_keys: Option<Vec<String>>,
}

/// Fluent builder for [`Query`] descriptors.
///
/// Chaining methods consume and return the builder; [`QueryBuilder::build`]
/// takes an independent snapshot, so a builder can produce several
/// descriptors and later mutation never alters descriptors already built.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Create a builder for the given record type.
    pub fn new(record_type: impl Into<RecordType>) -> Self {
        Self {
            query: Query {
                record_type: record_type.into(),
                filter_by: Vec::new(),
                sort_by: Vec::new(),
                results_limit: None,
                desired_keys: None,
            },
        }
    }

    /// Add a filter to the query.
    ///
    /// Filters accumulate in call order. The comparator/value pairing is
    /// not validated here.
    pub fn filter(
        mut self,
        field_name: impl Into<FieldName>,
        comparator: Comparator,
        field_value: impl Into<Value>,
    ) -> Self {
        self.query.filter_by.push(Filter {
            field_name: field_name.into(),
            comparator,
            field_value: field_value.into(),
        });
        self
    }

    /// Add an equals filter.
    pub fn equals(self, field_name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.filter(field_name, Comparator::Equals, value)
    }

    /// Add a not-equals filter.
    pub fn not_equals(self, field_name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.filter(field_name, Comparator::NotEquals, value)
    }

    /// Add a greater-than filter.
    pub fn greater_than(self, field_name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.filter(field_name, Comparator::GreaterThan, value)
    }

    /// Add a less-than filter.
    pub fn less_than(self, field_name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.filter(field_name, Comparator::LessThan, value)
    }

    /// Add a substring filter.
    pub fn contains(self, field_name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.filter(field_name, Comparator::Contains, value.into())
    }

    /// Add a prefix filter.
    pub fn starts_with(self, field_name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.filter(field_name, Comparator::StartsWith, value.into())
    }

    /// Add a proximity filter on a location field.
    pub fn near(self, field_name: impl Into<FieldName>, latitude: f64, longitude: f64) -> Self {
        self.filter(
            field_name,
            Comparator::Near,
            Location::new(latitude, longitude),
        )
    }

    /// Add a sort directive.
    pub fn sort_by(mut self, field_name: impl Into<FieldName>, ascending: bool) -> Self {
        self.query.sort_by.push(Sort {
            field_name: field_name.into(),
            ascending,
        });
        self
    }

    /// Add an ascending sort directive.
    pub fn sort_ascending(self, field_name: impl Into<FieldName>) -> Self {
        self.sort_by(field_name, true)
    }

    /// Add a descending sort directive.
    pub fn sort_descending(self, field_name: impl Into<FieldName>) -> Self {
        self.sort_by(field_name, false)
    }

    /// Set the maximum number of results, overwriting any previous value.
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.results_limit = Some(limit);
        self
    }

    /// Set the fields to materialize, overwriting any previous selection.
    pub fn select(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.query.desired_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Take a snapshot of the current state as an immutable descriptor.
    ///
    /// Each call returns an independently owned [`Query`].
    pub fn build(&self) -> Query {
        self.query.clone()
    }
}

/// Create a new query builder for the given record type.
pub fn create_query(record_type: impl Into<RecordType>) -> QueryBuilder {
    QueryBuilder::new(record_type)
}

/// Build a single-equality query in one call.
pub fn simple_query(
    record_type: impl Into<RecordType>,
    field_name: impl Into<FieldName>,
    value: impl Into<Value>,
) -> Query {
    create_query(record_type).equals(field_name, value).build()
}
