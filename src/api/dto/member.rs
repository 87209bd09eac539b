//! DTOs for member endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Member, MemberUpdate, NewMember};

/// Request body for `POST /members`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 80, message = "Email must be at most 80 characters")
    )]
    pub email: String,

    pub plan_id: i64,

    /// Defaults to active when omitted.
    pub status: Option<bool>,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(req: CreateMemberRequest) -> Self {
        NewMember {
            name: req.name,
            age: req.age,
            email: req.email,
            plan_id: req.plan_id,
            status: req.status.unwrap_or(true),
        }
    }
}

/// Request body for `PUT /members/{id}`.
///
/// All fields are optional; only supplied fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 80, message = "Email must be at most 80 characters")
    )]
    pub email: Option<String>,

    pub plan_id: Option<i64>,

    pub status: Option<bool>,
}

impl From<UpdateMemberRequest> for MemberUpdate {
    fn from(req: UpdateMemberRequest) -> Self {
        MemberUpdate {
            name: req.name,
            age: req.age,
            email: req.email,
            plan_id: req.plan_id,
            status: req.status,
        }
    }
}

/// JSON representation of a member.
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub plan_id: i64,
    pub status: bool,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        MemberResponse {
            member_id: m.id,
            name: m.name,
            age: m.age,
            email: m.email,
            plan_id: m.plan_id,
            status: m.status,
        }
    }
}
