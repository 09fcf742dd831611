//! BOOK command - Manage books.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_timestamp, make_empty_request, make_request, output, HumanReadable};

/// Arguments for the book command.
#[derive(Args)]
pub struct BookArgs {
    #[command(subcommand)]
    pub action: BookAction,
}

#[derive(Subcommand)]
pub enum BookAction {
    /// List all books
    List,

    /// Create a book (you become its author)
    Create {
        /// Book title
        title: String,
    },

    /// Retrieve a book
    Get {
        /// Book ID
        id: Uuid,
    },

    /// Update a book's title
    Update {
        /// Book ID
        id: Uuid,

        /// New title
        title: String,
    },

    /// Delete a book (sections cascade)
    Delete {
        /// Book ID
        id: Uuid,
    },
}

/// Request body for create and update.
#[derive(Serialize)]
struct BookRequest {
    title: String,
}

/// Wire representation of a book.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub created: DateTime<Utc>,
}

/// List of books.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BookList(pub Vec<BookResponse>);

/// Confirmation for delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: Uuid,
}

impl HumanReadable for BookResponse {
    fn print_human(&self) {
        println!("{}", self.title.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Author:".cyan(), self.author_id);
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
    }
}

impl HumanReadable for BookList {
    fn print_human(&self) {
        println!("{}", "Books".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No books)".dimmed());
            return;
        }

        for book in &self.0 {
            println!("  {} {}", book.id, book.title);
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

impl HumanReadable for Deleted {
    fn print_human(&self) {
        println!("{}", "Deleted.".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
    }
}

/// Execute the book command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: BookArgs,
) -> Result<()> {
    match args.action {
        BookAction::List => {
            let url = format!("{}/api/books/", base_url);
            let response: BookList = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        BookAction::Create { title } => {
            let url = format!("{}/api/books/", base_url);
            let response: BookResponse =
                make_request(client.post(&url).json(&BookRequest { title })).await?;
            output(&response, human)
        }

        BookAction::Get { id } => {
            let url = format!("{}/api/books/{}/", base_url, id);
            let response: BookResponse = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        BookAction::Update { id, title } => {
            let url = format!("{}/api/books/{}/", base_url, id);
            let response: BookResponse =
                make_request(client.put(&url).json(&BookRequest { title })).await?;
            output(&response, human)
        }

        BookAction::Delete { id } => {
            let url = format!("{}/api/books/{}/", base_url, id);
            make_empty_request(client.delete(&url)).await?;
            output(&Deleted { id }, human)
        }
    }
}
