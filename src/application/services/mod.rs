//! Business logic services for the application layer.

pub mod member_service;
pub mod plan_service;

pub use member_service::MemberService;
pub use plan_service::PlanService;
