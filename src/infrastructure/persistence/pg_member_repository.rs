//! PostgreSQL implementation of the member repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Member, MemberUpdate, NewMember};
use crate::domain::repositories::MemberRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct MemberRow {
    member_id: i64,
    name: String,
    age: i32,
    email: String,
    plan_id: i64,
    status: bool,
}

impl From<MemberRow> for Member {
    fn from(r: MemberRow) -> Self {
        Member::new(r.member_id, r.name, r.age, r.email, r.plan_id, r.status)
    }
}

/// PostgreSQL repository for gym members.
pub struct PgMemberRepository {
    pool: Arc<PgPool>,
}

impl PgMemberRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn create(&self, new_member: NewMember) -> Result<Member, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO members (name, age, email, plan_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING member_id, name, age, email, plan_id, status
            "#,
        )
        .bind(new_member.name)
        .bind(new_member.age)
        .bind(new_member.email)
        .bind(new_member.plan_id)
        .bind(new_member.status)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT member_id, name, age, email, plan_id, status
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Member::from))
    }

    async fn list(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT member_id, name, age, email, plan_id, status
            FROM members
            ORDER BY member_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn list_by_plan(&self, plan_id: i64) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT member_id, name, age, email, plan_id, status
            FROM members
            WHERE plan_id = $1
            ORDER BY member_id
            "#,
        )
        .bind(plan_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn update(&self, id: i64, update: MemberUpdate) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            UPDATE members SET
                name    = COALESCE($2::VARCHAR, name),
                age     = COALESCE($3::INTEGER, age),
                email   = COALESCE($4::VARCHAR, email),
                plan_id = COALESCE($5::BIGINT, plan_id),
                status  = COALESCE($6::BOOLEAN, status)
            WHERE member_id = $1
            RETURNING member_id, name, age, email, plan_id, status
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.age)
        .bind(update.email)
        .bind(update.plan_id)
        .bind(update.status)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Member::from))
    }

    async fn delete(&self, id: i64) -> Result<Option<Member>, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            DELETE FROM members
            WHERE member_id = $1
            RETURNING member_id, name, age, email, plan_id, status
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Member::from))
    }
}
