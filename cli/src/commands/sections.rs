//! SECTION command - Manage sections.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_timestamp, make_empty_request, make_request, output, HumanReadable};
use crate::commands::books::Deleted;

/// Arguments for the section command.
#[derive(Args)]
pub struct SectionArgs {
    #[command(subcommand)]
    pub action: SectionAction,
}

#[derive(Subcommand)]
pub enum SectionAction {
    /// List all sections
    List,

    /// Create a section (author role required)
    Create {
        /// Section title
        title: String,

        /// Book ID the section belongs to
        book: Uuid,

        /// Parent section ID for nesting (same book)
        #[arg(long)]
        parent: Option<Uuid>,
    },

    /// Retrieve a section
    Get {
        /// Section ID
        id: Uuid,
    },

    /// Update a section
    Update {
        /// Section ID
        id: Uuid,

        /// New title
        title: String,

        /// Book ID the section belongs to
        book: Uuid,

        /// Parent section ID; omit to clear the parent
        #[arg(long)]
        parent: Option<Uuid>,
    },

    /// Delete a section (children cascade)
    Delete {
        /// Section ID
        id: Uuid,
    },
}

/// Request body for create and update.
#[derive(Serialize)]
struct SectionRequest {
    title: String,
    book: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_section_id: Option<Uuid>,
}

/// Wire representation of a section.
#[derive(Debug, Deserialize, Serialize)]
pub struct SectionResponse {
    pub id: Uuid,
    pub title: String,
    pub book_id: Uuid,
    pub parent_section_id: Option<Uuid>,
    pub created: DateTime<Utc>,
}

/// List of sections.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SectionList(pub Vec<SectionResponse>);

impl HumanReadable for SectionResponse {
    fn print_human(&self) {
        println!("{}", self.title.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Book:".cyan(), self.book_id);
        match self.parent_section_id {
            Some(parent) => println!("  {} {}", "Parent:".cyan(), parent),
            None => println!("  {} {}", "Parent:".cyan(), "(top-level)".dimmed()),
        }
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
    }
}

impl HumanReadable for SectionList {
    fn print_human(&self) {
        println!("{}", "Sections".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No sections)".dimmed());
            return;
        }

        for section in &self.0 {
            let nested = if section.parent_section_id.is_some() {
                "  └ "
            } else {
                ""
            };
            println!("  {} {}{}", section.id, nested, section.title);
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the section command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SectionArgs,
) -> Result<()> {
    match args.action {
        SectionAction::List => {
            let url = format!("{}/api/sections/", base_url);
            let response: SectionList = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        SectionAction::Create {
            title,
            book,
            parent,
        } => {
            let url = format!("{}/api/sections/", base_url);
            let request_body = SectionRequest {
                title,
                book,
                parent_section_id: parent,
            };
            let response: SectionResponse =
                make_request(client.post(&url).json(&request_body)).await?;
            output(&response, human)
        }

        SectionAction::Get { id } => {
            let url = format!("{}/api/sections/{}/", base_url, id);
            let response: SectionResponse = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        SectionAction::Update {
            id,
            title,
            book,
            parent,
        } => {
            let url = format!("{}/api/sections/{}/", base_url, id);
            let request_body = SectionRequest {
                title,
                book,
                parent_section_id: parent,
            };
            let response: SectionResponse =
                make_request(client.put(&url).json(&request_body)).await?;
            output(&response, human)
        }

        SectionAction::Delete { id } => {
            let url = format!("{}/api/sections/{}/", base_url, id);
            make_empty_request(client.delete(&url)).await?;
            output(&Deleted { id }, human)
        }
    }
}
