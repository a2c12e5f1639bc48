//! `roster-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod key;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use key::EntityKey;
pub use value_object::ValueObject;
