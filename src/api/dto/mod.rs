//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names match the public wire format
//! (`plan_id`, `plan_name`, `member_id`).

pub mod health;
pub mod member;
pub mod plan;
