//! CLI administration tool for book-service.
//!
//! Manages books directly against PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all books
//! cargo run --bin admin -- book list
//!
//! # Add a book (prompts for missing fields)
//! cargo run --bin admin -- book add --title "Dune" --author "Frank Herbert" --year 1965
//!
//! # Update a book
//! cargo run --bin admin -- book update 1 --title "Dune (rev)"
//!
//! # Delete a book
//! cargo run --bin admin -- book delete 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string, or
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: the same components the server accepts
//!
//! Pending migrations are applied on connect, so a fresh database works without
//! starting the server first.

use book_service::application::services::BookService;
use book_service::config::Config;
use book_service::domain::entities::{Book, NewBook};
use book_service::infrastructure::persistence::PgBookRepository;
use book_service::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

type PgBookService = BookService<PgBookRepository>;

/// CLI tool for managing book-service.
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
    /// Manage books
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Book management subcommands.
#[derive(Subcommand)]
enum BookAction {
    /// List all books
    List,

    /// Show a single book
    Show { id: i64 },

    /// Add a new book
    Add {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        /// Publication year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Replace title, author and year of a book
    Update {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        /// Publication year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Delete a book
    Delete {
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

    let database_url =
        Config::load_database_url().context("Failed to load database configuration")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    server::run_migrations(&pool).await?;

    match cli.command {
        Commands::Book { action } => handle_book_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches book management commands.
async fn handle_book_action(action: BookAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgBookRepository::new(Arc::new(pool.clone())));
    let service = BookService::new(repo);

    match action {
        BookAction::List => list_books(&service).await,
        BookAction::Show { id } => show_book(&service, id).await,
        BookAction::Add {
            title,
            author,
            year,
        } => add_book(&service, title, author, year).await,
        BookAction::Update {
            id,
            title,
            author,
            year,
        } => update_book(&service, id, title, author, year).await,
        BookAction::Delete { id, yes } => delete_book(&service, id, yes).await,
    }
}

/// Lists all books as a table.
///
/// # Output Format
///
/// ```text
/// 📚 Books
///
///   ID   Title                          Author                    Year
///   ──────────────────────────────────────────────────────────────────────
///   1    Dune                           Frank Herbert             1965
/// ```
async fn list_books(service: &PgBookService) -> Result<()> {
    println!("{}", "📚 Books".bright_blue().bold());
    println!();

    let books = service
        .get_all_books()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        println!();
        println!(
            "  Add one with: {} admin book add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<25} {:<6}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Author".bright_white().bold(),
        "Year".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for book in &books {
        println!(
            "  {:<4} {:<30} {:<25} {}",
            book.id.to_string().bright_black(),
            book.title.cyan(),
            book.author,
            book.publication_year.to_string().bright_black()
        );
    }

    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_book(service: &PgBookService, id: i64) -> Result<()> {
    let book = service
        .get_book_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match book {
        Some(book) => print_book(&book),
        None => println!("{}", format!("⚠️  No book with id {id}").yellow()),
    }

    Ok(())
}

/// Adds a book, prompting for any field not given on the command line.
async fn add_book(
    service: &PgBookService,
    title: Option<String>,
    author: Option<String>,
    year: Option<i32>,
) -> Result<()> {
    println!("{}", "➕ Add Book".bright_blue().bold());
    println!();

    let new_book = prompt_fields(title, author, year, None)?;

    let book = service
        .add_book(new_book)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add book: {}", e))?;

    println!();
    println!("{}", "✅ Book added successfully!".green().bold());
    print_book(&book);

    Ok(())
}

/// Replaces the mutable fields of a book. Current values are offered as defaults.
async fn update_book(
    service: &PgBookService,
    id: i64,
    title: Option<String>,
    author: Option<String>,
    year: Option<i32>,
) -> Result<()> {
    println!("{}", "✏️  Update Book".bright_blue().bold());
    println!();

    let current = service
        .get_book_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("Book not found with id {id}"))?;

    let new_data = prompt_fields(title, author, year, Some(&current))?;

    let book = service
        .update_book(id, new_data)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update book: {}", e))?;

    println!();
    println!("{}", "✅ Book updated successfully!".green().bold());
    print_book(&book);

    Ok(())
}

/// Deletes a book with confirmation prompt (default: No).
async fn delete_book(service: &PgBookService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Book".bright_blue().bold());
    println!();

    let Some(book) = service
        .get_book_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    else {
        println!("{}", "⚠️  Nothing to delete".yellow());
        return Ok(());
    };

    print_book(&book);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this book?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_book(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete book: {}", e))?;

    println!();
    println!("{}", "✅ Book deleted".green().bold());
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
    }

    Ok(())
}

fn prompt_fields(
    title: Option<String>,
    author: Option<String>,
    year: Option<i32>,
    current: Option<&Book>,
) -> Result<NewBook> {
    let title = match title {
        Some(t) => t,
        None => {
            let mut input = Input::<String>::new().with_prompt("Title");
            if let Some(book) = current {
                input = input.default(book.title.clone());
            }
            input.interact_text()?
        }
    };

    let author = match author {
        Some(a) => a,
        None => {
            let mut input = Input::<String>::new().with_prompt("Author");
            if let Some(book) = current {
                input = input.default(book.author.clone());
            }
            input.interact_text()?
        }
    };

    let publication_year = match year {
        Some(y) => y,
        None => {
            let mut input = Input::<i32>::new().with_prompt("Publication year");
            if let Some(book) = current {
                input = input.default(book.publication_year);
            }
            input.interact_text()?
        }
    };

    Ok(NewBook {
        title,
        author,
        publication_year,
    })
}

fn print_book(book: &Book) {
    println!();
    println!("  ID:     {}", book.id.to_string().bright_black());
    println!("  Title:  {}", book.title.cyan());
    println!("  Author: {}", book.author);
    println!("  Year:   {}", book.publication_year);
    println!();
}
