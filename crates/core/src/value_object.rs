//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity: two instances holding the same field
/// values are equal, and copies are independent of each other.
///
/// Unlike the textbook definition, implementors are not required to be
/// immutable. Inventory lines are plain records whose fields are updated in
/// place by whoever owns them; the trait only promises value equality.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Shelf {
///     aisle: u32,
///     label: String,
/// }
///
/// impl ValueObject for Shelf {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
