//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod health;
pub mod members;
pub mod plans;

pub use health::health_handler;
pub use members::{
    create_member_handler, delete_member_handler, get_member_handler, list_members_handler,
    update_member_handler,
};
pub use plans::{
    create_plan_handler, delete_plan_handler, get_plan_handler, list_plans_handler,
    plan_members_handler, update_plan_handler,
};
