//! COLLAB command - Manage collaborations.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_timestamp, make_empty_request, make_request, output, HumanReadable};
use crate::commands::books::Deleted;

/// Arguments for the collab command.
#[derive(Args)]
pub struct CollabArgs {
    #[command(subcommand)]
    pub action: CollabAction,
}

#[derive(Subcommand)]
pub enum CollabAction {
    /// List all collaborations
    List,

    /// Create a collaboration on a book (you become the collaborator)
    Create {
        /// Book ID to collaborate on
        book: Uuid,

        /// Role label recorded on the collaboration
        #[arg(long)]
        role: Option<String>,
    },

    /// Retrieve a collaboration
    Get {
        /// Collaboration ID
        id: Uuid,
    },

    /// Update a collaboration's role label
    Update {
        /// Collaboration ID
        id: Uuid,

        /// New role label
        #[arg(long)]
        role: String,
    },

    /// Delete a collaboration
    Delete {
        /// Collaboration ID
        id: Uuid,
    },
}

/// Request body for create.
#[derive(Serialize)]
struct CreateCollabRequest {
    book: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

/// Request body for update.
#[derive(Serialize)]
struct UpdateCollabRequest {
    role: String,
}

/// Wire representation of a collaboration.
#[derive(Debug, Deserialize, Serialize)]
pub struct CollaborationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub role: String,
    pub can_edit: bool,
    pub created: DateTime<Utc>,
}

/// List of collaborations.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CollaborationList(pub Vec<CollaborationResponse>);

impl HumanReadable for CollaborationResponse {
    fn print_human(&self) {
        println!("{}", "Collaboration".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "User:".cyan(), self.user_id);
        println!("  {} {}", "Book:".cyan(), self.book_id);
        println!("  {} {}", "Role:".cyan(), self.role);
        println!(
            "  {} {}",
            "Can edit:".cyan(),
            if self.can_edit { "yes" } else { "no" }
        );
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
    }
}

impl HumanReadable for CollaborationList {
    fn print_human(&self) {
        println!("{}", "Collaborations".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No collaborations)".dimmed());
            return;
        }

        println!(
            "  {:<38} {:<15} {}",
            "ID".cyan(),
            "Role".cyan(),
            "Can edit".cyan()
        );
        println!("  {}", "-".repeat(55));

        for collab in &self.0 {
            println!(
                "  {:<38} {:<15} {}",
                collab.id,
                collab.role,
                if collab.can_edit { "yes" } else { "no" }
            );
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the collab command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CollabArgs,
) -> Result<()> {
    match args.action {
        CollabAction::List => {
            let url = format!("{}/api/collaborations/", base_url);
            let response: CollaborationList = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        CollabAction::Create { book, role } => {
            let url = format!("{}/api/collaborations/", base_url);
            let request_body = CreateCollabRequest { book, role };
            let response: CollaborationResponse =
                make_request(client.post(&url).json(&request_body)).await?;
            output(&response, human)
        }

        CollabAction::Get { id } => {
            let url = format!("{}/api/collaborations/{}/", base_url, id);
            let response: CollaborationResponse = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        CollabAction::Update { id, role } => {
            let url = format!("{}/api/collaborations/{}/", base_url, id);
            let response: CollaborationResponse =
                make_request(client.patch(&url).json(&UpdateCollabRequest { role })).await?;
            output(&response, human)
        }

        CollabAction::Delete { id } => {
            let url = format!("{}/api/collaborations/{}/", base_url, id);
            make_empty_request(client.delete(&url)).await?;
            output(&Deleted { id }, human)
        }
    }
}
