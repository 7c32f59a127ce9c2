//! `missionstock-core`
//!
//! Shared primitives for the inventory crates: the error type every domain check
//! returns, the `Entity` trait stores look records up by, and the product id.
//! Nothing here touches the filesystem.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
