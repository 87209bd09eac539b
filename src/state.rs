//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{MemberService, PlanService};
use crate::infrastructure::persistence::{PgMemberRepository, PgPlanRepository};

pub type AppMemberService = MemberService<PgMemberRepository, PgPlanRepository>;
pub type AppPlanService = PlanService<PgPlanRepository>;

#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<AppMemberService>,
    pub plan_service: Arc<AppPlanService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let plan_repository = Arc::new(PgPlanRepository::new(pool.clone()));
        let member_repository = Arc::new(PgMemberRepository::new(pool.clone()));

        Self {
            member_service: Arc::new(MemberService::new(
                member_repository,
                plan_repository.clone(),
            )),
            plan_service: Arc::new(PlanService::new(plan_repository)),
            db: pool,
        }
    }
}
