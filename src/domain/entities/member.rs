//! Member entity representing a gym customer.

/// A gym customer subscribed to exactly one plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub plan_id: i64,
    pub status: bool,
}

impl Member {
    /// Creates a new Member instance.
    pub fn new(
        id: i64,
        name: String,
        age: i32,
        email: String,
        plan_id: i64,
        status: bool,
    ) -> Self {
        Self {
            id,
            name,
            age,
            email,
            plan_id,
            status,
        }
    }
}

#[cfg(test)]
impl Member {
    /// Mirrors the repository's COALESCE update for service mocks.
    pub(crate) fn apply(&self, update: &MemberUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            age: update.age.unwrap_or(self.age),
            email: update.email.clone().unwrap_or_else(|| self.email.clone()),
            plan_id: update.plan_id.unwrap_or(self.plan_id),
            status: update.status.unwrap_or(self.status),
        }
    }
}

/// Input data for creating a new member.
///
/// `plan_id` must reference an existing plan.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub plan_id: i64,
    pub status: bool,
}

/// Partial update for an existing member.
///
/// `None` fields are left unchanged. A supplied `plan_id` must reference an
/// existing plan.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub plan_id: Option<i64>,
    pub status: Option<bool>,
}

impl MemberUpdate {
    /// Returns true if no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.email.is_none()
            && self.plan_id.is_none()
            && self.status.is_none()
    }
}
