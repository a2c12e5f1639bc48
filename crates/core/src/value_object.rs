//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; they are defined entirely by their
/// attribute values and are immutable once created. Two value objects with
/// the same values are the same value.
///
/// Example: `Capacity(30)` is a value object; a `Group` with that capacity
/// is an entity (two groups with the same capacity are still distinct).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
