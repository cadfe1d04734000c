//! `boxoffice-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{first_duplicate_id, Entity};
pub use error::{DomainError, DomainResult};
pub use id::{ScreenId, ShowId};
