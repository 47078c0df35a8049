//! # Cirrus Core
//!
//! Query model and comparator rules for the Cirrus cloud record client.
//!
//! This crate holds everything about cloud record queries that can be
//! decided without talking to the platform store: the comparator
//! vocabulary, the rules for which comparators fit which field-value
//! shapes, the record and field-value types, and a fluent builder that
//! produces immutable query descriptors. The async façade that carries
//! descriptors to the store lives in `cirrus-client`.
//!
//! ## Design Principles
//!
//! - **No IO**: nothing here touches the network or the platform
//! - **Deterministic**: classification and building are pure functions
//! - **Wire-faithful**: serialized shapes match the store's query payload
//!   field-for-field
//! - **Permissive**: the builder accepts what the caller writes; the
//!   validator is a separate, opt-in check
//!
//! ## Core Concepts
//!
//! ### Query descriptors
//!
//! A [`Query`] names a record type and carries filters (implicit AND, in
//! insertion order), sort directives, an optional result ceiling, and an
//! optional field projection. Descriptors are immutable snapshots;
//! building one never consumes the builder.
//!
//! ### Comparator admissibility
//!
//! Field values are loose JSON. [`FieldClass::of`] classifies a value
//! structurally (string, number, boolean, location, list) and
//! [`Comparator::is_valid_for`] answers whether an operator makes sense
//! for that class. Values fitting no class reject every operator.
//!
//! ## Quick Start
//!
//! ```rust
//! use cirrus_core::{create_query, Comparator};
//! use serde_json::json;
//!
//! let query = create_query("Note")
//!     .equals("title", "Groceries")
//!     .greater_than("priority", 3)
//!     .sort_descending("modifiedAt")
//!     .limit(25)
//!     .build();
//!
//! assert_eq!(query.record_type, "Note");
//! assert_eq!(query.filter_by.len(), 2);
//!
//! // Admissibility is decided from the value's shape.
//! assert!(Comparator::Contains.is_valid_for(&json!("text")));
//! assert!(!Comparator::Contains.is_valid_for(&json!(42)));
//! ```

pub mod comparator;
pub mod field;
pub mod query;
pub mod record;

// Re-export main types at crate root
pub use comparator::{Comparator, FieldClass, ParseComparatorError};
pub use field::{
    Asset, Bytes, Location, Reference, ReferenceAction, ReferenceList, StringList, Timestamp,
};
pub use query::{create_query, simple_query, Filter, Query, QueryBuilder, Sort};
pub use record::Record;

/// Type aliases for clarity
pub type RecordName = String;
pub type RecordType = String;
pub type FieldName = String;
