//! `stockline-core` — domain foundation building blocks.
//!
//! Shared error model and marker traits. No infrastructure concerns.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
