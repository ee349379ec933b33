//! Inventory domain module.
//!
//! Holds the inventory line value type. Update rules for `sell_in` and
//! `quality` live with whoever owns the items, not here.

pub mod item;

pub use item::Item;
