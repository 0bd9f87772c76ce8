//! Projections - field-filtered views over a fully materialized entity.
//!
//! Each projectable type publishes an explicit table of field names and
//! accessors. A projection starts from an empty value and copies across only
//! the fields named in a [`FieldSet`]. An empty set selects every field.
//!
//! ## Example
//!
//! ```ignore
//! use hateoas_messages::projection::{project, FieldSet};
//!
//! let only_title = project(&stored, &FieldSet::from_names(["title"]));
//! assert!(only_title.content.is_none());
//! ```

mod field_set;

pub use field_set::FieldSet;

/// A named field and the function that copies it between two values.
pub struct FieldAccessor<T> {
    pub name: &'static str,
    pub copy: fn(&T, &mut T),
}

/// Types that can be projected onto a subset of their fields.
pub trait Projectable: Default + Clone + 'static {
    /// Every serializable field, in declaration order.
    const FIELDS: &'static [FieldAccessor<Self>];

    /// True when `name` is one of this type's fields.
    fn has_field(name: &str) -> bool {
        Self::FIELDS.iter().any(|f| f.name == name)
    }
}

/// Build a new value holding only the fields of `record` selected by `fields`.
///
/// The identity field is treated like any other: it is copied only when the
/// set names it (or the set is empty). Callers that must always expose the
/// identity add it to the set themselves.
pub fn project<T: Projectable>(record: &T, fields: &FieldSet) -> T {
    if fields.is_empty() {
        return record.clone();
    }

    let mut view = T::default();
    for field in T::FIELDS {
        if fields.contains(field.name) {
            (field.copy)(record, &mut view);
        }
    }
    view
}
