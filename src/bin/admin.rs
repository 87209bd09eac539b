//! CLI administration tool for gym-membership.
//!
//! Manages plans and inspects the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List plans with their member counts
//! cargo run --bin admin -- plan list
//!
//! # Create a plan (prompts for missing values)
//! cargo run --bin admin -- plan create --name Basic --price 99.9
//!
//! # Delete a plan without members
//! cargo run --bin admin -- plan delete 3
//!
//! # Member and plan totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection

use gym_membership::api::dto::plan::CreatePlanRequest;
use gym_membership::application::services::PlanService;
use gym_membership::config::Config;
use gym_membership::error::AppError;
use gym_membership::infrastructure::persistence::PgPlanRepository;
use gym_membership::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing gym-membership.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Show member and plan totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Plan management subcommands.
#[derive(Subcommand)]
enum PlanAction {
    /// List all plans
    List,

    /// Create a new plan
    Create {
        /// Plan name (must be unique)
        #[arg(short, long)]
        name: Option<String>,

        /// Plan price
        #[arg(short, long)]
        price: Option<f64>,

        /// Create the plan as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Delete a plan that has no members
    Delete {
        /// Plan ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Plan { action } => handle_plan_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches plan management commands.
async fn handle_plan_action(action: PlanAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgPlanRepository::new(Arc::new(pool.clone())));
    let service = PlanService::new(repository);

    match action {
        PlanAction::List => list_plans(&service).await,
        PlanAction::Create {
            name,
            price,
            inactive,
        } => create_plan(&service, name, price, !inactive).await,
        PlanAction::Delete { id, yes } => delete_plan(&service, id, yes).await,
    }
}

/// Lists all plans with their member counts.
///
/// ```text
///   ID  Name                           Price      Members  Status
///   1   Basic                          99.90      12       ACTIVE
/// ```
async fn list_plans(service: &PlanService<PgPlanRepository>) -> Result<()> {
    println!("{}", "Plans".bright_blue().bold());
    println!();

    let plans = service
        .list_plans_with_member_counts()
        .await
        .context("Failed to list plans")?;

    if plans.is_empty() {
        println!("{}", "  No plans found".yellow());
        println!();
        println!(
            "  Create one with: {} admin plan create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<10} {:<8} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Members".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "-".repeat(66).bright_black());

    for (plan, members) in &plans {
        let status = if plan.status {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };

        println!(
            "  {:<4} {:<30} {:<10} {:<8} {}",
            plan.id.to_string().bright_black(),
            plan.name.cyan(),
            format!("{:.2}", plan.price),
            members,
            status
        );
    }

    println!();
    println!("  Total: {}", plans.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a plan, prompting for any value not given on the command line.
async fn create_plan(
    service: &PlanService<PgPlanRepository>,
    name: Option<String>,
    price: Option<f64>,
    status: bool,
) -> Result<()> {
    println!("{}", "Create Plan".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Plan name").interact_text()?,
    };

    let price = match price {
        Some(p) => p,
        None => Input::<f64>::new().with_prompt("Price").interact_text()?,
    };

    let request = plan_request(name, price, status)?;

    match service.create_plan(request.into()).await {
        Ok(plan) => {
            println!(
                "{} {} (id {})",
                "Plan created:".green().bold(),
                plan.name.cyan(),
                plan.id
            );
            Ok(())
        }
        Err(AppError::Conflict { .. }) => {
            println!("{}", "A plan with this name already exists".yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to create plan"),
    }
}

/// Builds a plan request, applying the same validation rules as `POST /plans`.
fn plan_request(name: String, price: f64, status: bool) -> Result<CreatePlanRequest> {
    let request = CreatePlanRequest {
        plan_name: name,
        price,
        status: Some(status),
    };
    request.validate().context("Invalid plan")?;

    Ok(request)
}

/// Deletes a plan after confirmation. Plans with members are refused.
async fn delete_plan(
    service: &PlanService<PgPlanRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Delete Plan".bright_blue().bold());
    println!();

    let plan = service.get_plan(id).await.context("Plan not found")?;

    println!("  Plan: {}", plan.name.cyan());
    println!("  ID:   {}", plan.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this plan?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    match service.delete_plan(id).await {
        Ok(_) => {
            println!("{}", "Plan deleted".green().bold());
            Ok(())
        }
        Err(AppError::Conflict { details, .. }) => {
            println!(
                "{} {} member(s) still subscribed",
                "Cannot delete:".red().bold(),
                details["members_count"]
            );
            Ok(())
        }
        Err(e) => Err(e).context("Failed to delete plan"),
    }
}

/// Displays member and plan totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let plans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plans")
        .fetch_one(pool)
        .await?;
    let active_plans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plans WHERE status")
        .fetch_one(pool)
        .await?;
    let members: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await?;
    let active_members: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE status")
        .fetch_one(pool)
        .await?;

    println!(
        "  Plans:   {} ({} active)",
        plans.to_string().bright_white().bold(),
        active_plans.to_string().green()
    );
    println!(
        "  Members: {} ({} active)",
        members.to_string().bright_white().bold(),
        active_members.to_string().green()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i32>("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
