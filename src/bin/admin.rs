//! CLI administration tool for the course library.
//!
//! Provides commands for inspecting and maintaining the database without
//! going through the HTTP API, which never updates or deletes.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # List authors, optionally filtered
//! cargo run --bin admin -- author list --category History --page 2
//!
//! # Remove an author and all of its courses
//! cargo run --bin admin -- author remove 2902b665-1190-4c70-9915-b9c2d7680450
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use course_library::config::{database_url_from_env, mask_connection_string};
use course_library::domain::entities::AuthorQuery;
use course_library::domain::repositories::CourseLibraryRepository;
use course_library::infrastructure::persistence::PgCourseLibraryRepository;
use course_library::utils::age::current_age;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// CLI tool for managing the course library.
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
    /// Manage authors
    Author {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Author management subcommands.
#[derive(Subcommand)]
enum AuthorAction {
    /// List authors in insertion order
    List {
        /// Only authors with this main category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Only authors whose first or last name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Page number
        #[arg(short, long)]
        page: Option<u32>,

        /// Page size (at most 20)
        #[arg(long)]
        size: Option<u32>,
    },

    /// Remove an author together with its courses
    Remove {
        /// Author ID
        id: Uuid,

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

    /// Apply pending migrations
    Migrate,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env()?;

    let pool = PgPool::connect(&database_url).await.with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(&database_url)
        )
    })?;

    match cli.command {
        Commands::Author { action } => handle_author_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches author management commands.
async fn handle_author_action(action: AuthorAction, pool: &PgPool) -> Result<()> {
    let repo = PgCourseLibraryRepository::new(Arc::new(pool.clone()));

    match action {
        AuthorAction::List {
            category,
            search,
            page,
            size,
        } => {
            list_authors(&repo, AuthorQuery::new(category, search, page, size)).await?;
        }
        AuthorAction::Remove { id, yes } => {
            remove_author(&repo, pool, id, yes).await?;
        }
    }

    Ok(())
}

/// Lists one page of authors.
///
/// # Output Format
///
/// ```text
/// 📚 Authors
///
///   ID                                    Name                      Age  Category
///   ──────────────────────────────────────────────────────────────────────────────
///   2902b665-1190-4c70-9915-b9c2d7680450  Jane Austen               249  Romance
///
///   Page 1 of 1 (1 total)
/// ```
async fn list_authors(repo: &PgCourseLibraryRepository, query: AuthorQuery) -> Result<()> {
    println!("{}", "📚 Authors".bright_blue().bold());
    println!();

    let page = repo
        .get_authors(&query)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list authors: {}", e))?;

    if page.items.is_empty() {
        println!("{}", "  No authors found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<37} {:<25} {:<4} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Age".bright_white().bold(),
        "Category".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    let today = Utc::now().date_naive();
    for author in &page.items {
        let name = format!("{} {}", author.first_name, author.last_name);
        println!(
            "  {:<37} {:<25} {:<4} {}",
            author.id.to_string().bright_black(),
            name.cyan(),
            current_age(author.date_of_birth, today),
            author.main_category
        );
    }

    println!();
    println!(
        "  Page {} of {} ({} total)",
        page.current_page,
        page.total_pages(),
        page.total_count.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Removes an author with confirmation prompt.
///
/// Courses are removed by the `ON DELETE CASCADE` foreign key.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Shows how many courses will be removed with the author
async fn remove_author(
    repo: &PgCourseLibraryRepository,
    pool: &PgPool,
    id: Uuid,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Remove Author".bright_blue().bold());
    println!();

    let author = repo
        .get_author(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Author not found")?;

    let courses = repo
        .get_courses(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Author:  {}",
        format!("{} {}", author.first_name, author.last_name).cyan()
    );
    println!("  ID:      {}", author.id.to_string().bright_black());
    println!("  Courses: {}", courses.len().to_string().bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this author and all of its courses?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::query("DELETE FROM authors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to remove author")?;

    println!();
    println!("{}", "✅ Author removed successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays author and course counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let authors_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(pool)
        .await?;

    let courses_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await?;

    let categories_count: i64 =
        sqlx::query_scalar("SELECT COUNT(DISTINCT lower(main_category)) FROM authors")
            .fetch_one(pool)
            .await?;

    println!(
        "  Authors:    {}",
        authors_count.to_string().bright_green().bold()
    );
    println!(
        "  Courses:    {}",
        courses_count.to_string().bright_green().bold()
    );
    println!(
        "  Categories: {}",
        categories_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🔧 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
