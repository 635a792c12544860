//! `orderflow-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no collaborators).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::DomainError;
pub use id::OrderId;
pub use money::Money;
