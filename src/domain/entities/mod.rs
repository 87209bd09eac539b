//! Core domain entities.
//!
//! - [`Plan`] - A subscription tier with a name, price, and active status
//! - [`Member`] - A gym customer subscribed to exactly one plan
//!
//! Each entity has a `New*` struct for inserts and a `*Update` struct for
//! partial updates where every field is optional.

pub mod member;
pub mod plan;

pub use member::{Member, MemberUpdate, NewMember};
pub use plan::{NewPlan, Plan, PlanUpdate};
