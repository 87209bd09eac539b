//! PostgreSQL implementation of the plan repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewPlan, Plan, PlanUpdate};
use crate::domain::repositories::PlanRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct PlanRow {
    plan_id: i64,
    plan_name: String,
    price: f64,
    status: bool,
}

impl From<PlanRow> for Plan {
    fn from(r: PlanRow) -> Self {
        Plan::new(r.plan_id, r.plan_name, r.price, r.status)
    }
}

#[derive(FromRow)]
struct PlanWithCountRow {
    #[sqlx(flatten)]
    plan: PlanRow,
    members_count: i64,
}

/// PostgreSQL repository for subscription plans.
///
/// Name uniqueness is backed by the `plans_plan_name_key` constraint, and
/// deletes are blocked by `members_plan_id_fkey` while members reference the plan.
pub struct PgPlanRepository {
    pool: Arc<PgPool>,
}

impl PgPlanRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    async fn create(&self, new_plan: NewPlan) -> Result<Plan, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            INSERT INTO plans (plan_name, price, status)
            VALUES ($1, $2, $3)
            RETURNING plan_id, plan_name, price, status
            "#,
        )
        .bind(new_plan.name)
        .bind(new_plan.price)
        .bind(new_plan.status)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Plan>, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT plan_id, plan_name, price, status
            FROM plans
            WHERE plan_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Plan::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Plan>, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT plan_id, plan_name, price, status
            FROM plans
            WHERE plan_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Plan::from))
    }

    async fn list(&self) -> Result<Vec<Plan>, AppError> {
        let rows = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT plan_id, plan_name, price, status
            FROM plans
            ORDER BY plan_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Plan::from).collect())
    }

    async fn update(&self, id: i64, update: PlanUpdate) -> Result<Option<Plan>, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            UPDATE plans SET
                plan_name = COALESCE($2::VARCHAR, plan_name),
                price     = COALESCE($3::DOUBLE PRECISION, price),
                status    = COALESCE($4::BOOLEAN, status)
            WHERE plan_id = $1
            RETURNING plan_id, plan_name, price, status
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.price)
        .bind(update.status)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Plan::from))
    }

    async fn delete(&self, id: i64) -> Result<Option<Plan>, AppError> {
        let row = sqlx::query_as::<_, PlanRow>(
            r#"
            DELETE FROM plans
            WHERE plan_id = $1
            RETURNING plan_id, plan_name, price, status
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Plan::from))
    }

    async fn count_members(&self, plan_id: i64) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members WHERE plan_id = $1")
                .bind(plan_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn list_with_member_counts(&self) -> Result<Vec<(Plan, i64)>, AppError> {
        let rows = sqlx::query_as::<_, PlanWithCountRow>(
            r#"
            SELECT p.plan_id, p.plan_name, p.price, p.status,
                   COUNT(m.member_id) AS members_count
            FROM plans p
            LEFT JOIN members m ON m.plan_id = p.plan_id
            GROUP BY p.plan_id
            ORDER BY p.plan_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| (r.plan.into(), r.members_count))
            .collect())
    }
}
