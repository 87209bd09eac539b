//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Members, plans, and their creation/update inputs
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Rules such as plan-reference checks live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
