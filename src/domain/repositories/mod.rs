//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for service tests.
//!
//! - [`PlanRepository`] - Plan CRUD and name lookups
//! - [`MemberRepository`] - Member CRUD and per-plan listings
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod member_repository;
pub mod plan_repository;

pub use member_repository::MemberRepository;
pub use plan_repository::PlanRepository;

#[cfg(test)]
pub use member_repository::MockMemberRepository;
#[cfg(test)]
pub use plan_repository::MockPlanRepository;
