//! Member management service.

use std::sync::Arc;

use crate::domain::entities::{Member, MemberUpdate, NewMember};
use crate::domain::repositories::{MemberRepository, PlanRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for managing members and their plan subscriptions.
///
/// Every write that sets a `plan_id` is checked against the plan repository
/// first, so a member never points at a missing plan.
pub struct MemberService<M: MemberRepository, P: PlanRepository> {
    member_repository: Arc<M>,
    plan_repository: Arc<P>,
}

impl<M: MemberRepository, P: PlanRepository> MemberService<M, P> {
    /// Creates a new member service.
    pub fn new(member_repository: Arc<M>, plan_repository: Arc<P>) -> Self {
        Self {
            member_repository,
            plan_repository,
        }
    }

    /// Retrieves a member by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the member does not exist.
    pub async fn get_member(&self, member_id: i64) -> Result<Member, AppError> {
        self.member_repository
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| member_not_found(member_id))
    }

    /// Lists every member. An empty store yields an empty list.
    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        self.member_repository.list().await
    }

    /// Creates a new member subscribed to an existing plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `plan_id` does not reference a plan.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_member(&self, new_member: NewMember) -> Result<Member, AppError> {
        self.ensure_plan_exists(new_member.plan_id).await?;

        let member = self.member_repository.create(new_member).await?;
        tracing::info!(
            member_id = member.id,
            plan_id = member.plan_id,
            "Member created"
        );

        Ok(member)
    }

    /// Applies a partial update to a member.
    ///
    /// A supplied `plan_id` is checked; an omitted one is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the member or the new plan does not exist.
    pub async fn update_member(
        &self,
        member_id: i64,
        update: MemberUpdate,
    ) -> Result<Member, AppError> {
        let current = self.get_member(member_id).await?;

        if let Some(plan_id) = update.plan_id
            && plan_id != current.plan_id
        {
            self.ensure_plan_exists(plan_id).await?;
        }

        if update.is_empty() {
            return Ok(current);
        }

        self.member_repository
            .update(member_id, update)
            .await?
            .ok_or_else(|| member_not_found(member_id))
    }

    /// Deletes a member and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the member does not exist.
    pub async fn delete_member(&self, member_id: i64) -> Result<Member, AppError> {
        let deleted = self
            .member_repository
            .delete(member_id)
            .await?
            .ok_or_else(|| member_not_found(member_id))?;
        tracing::info!(member_id, "Member deleted");

        Ok(deleted)
    }

    /// Lists the members subscribed to a plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist. A plan
    /// without members yields an empty list.
    pub async fn get_members_of_plan(&self, plan_id: i64) -> Result<Vec<Member>, AppError> {
        self.ensure_plan_exists(plan_id).await?;
        self.member_repository.list_by_plan(plan_id).await
    }

    async fn ensure_plan_exists(&self, plan_id: i64) -> Result<(), AppError> {
        if self.plan_repository.find_by_id(plan_id).await?.is_none() {
            tracing::warn!(plan_id, "Rejected reference to unknown plan");
            return Err(AppError::not_found(
                "Plan not found",
                json!({ "plan_id": plan_id }),
            ));
        }
        Ok(())
    }
}

fn member_not_found(member_id: i64) -> AppError {
    AppError::not_found("Member not found", json!({ "member_id": member_id }))
}
