//! Repository trait for member management.

use crate::domain::entities::{Member, MemberUpdate, NewMember};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for gym members.
///
/// Implementations do not check plan references themselves; the store's
/// foreign key is the last line, and [`crate::application::services::MemberService`]
/// checks references before writing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Inserts a new member.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the referenced plan vanished concurrently.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_member: NewMember) -> Result<Member, AppError>;

    /// Finds a member by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError>;

    /// Lists all members ordered by ID.
    async fn list(&self) -> Result<Vec<Member>, AppError>;

    /// Lists members subscribed to the given plan, ordered by ID.
    async fn list_by_plan(&self, plan_id: i64) -> Result<Vec<Member>, AppError>;

    /// Applies a partial update. Returns `None` if the member does not exist.
    async fn update(&self, id: i64, update: MemberUpdate) -> Result<Option<Member>, AppError>;

    /// Deletes a member and returns the removed row, or `None` if it did not exist.
    async fn delete(&self, id: i64) -> Result<Option<Member>, AppError>;
}
