//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgPlanRepository`] - Plan storage and lookups
//! - [`PgMemberRepository`] - Member storage and per-plan listings

pub mod pg_member_repository;
pub mod pg_plan_repository;

pub use pg_member_repository::PgMemberRepository;
pub use pg_plan_repository::PgPlanRepository;
