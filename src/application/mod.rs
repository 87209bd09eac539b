//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::plan_service::PlanService`] - Plan CRUD, name uniqueness, delete guard
//! - [`services::member_service::MemberService`] - Member CRUD and plan-reference checks

pub mod services;
