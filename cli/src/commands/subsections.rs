//! SUBSECTION command - Manage subsections.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_timestamp, make_empty_request, make_request, output, HumanReadable};
use crate::commands::books::Deleted;

/// Arguments for the subsection command.
#[derive(Args)]
pub struct SubsectionArgs {
    #[command(subcommand)]
    pub action: SubsectionAction,
}

#[derive(Subcommand)]
pub enum SubsectionAction {
    /// List all subsections
    List,

    /// Create a subsection
    Create {
        /// Subsection title
        title: String,

        /// Section ID the subsection belongs to
        section: Uuid,
    },

    /// Retrieve a subsection
    Get {
        /// Subsection ID
        id: Uuid,
    },

    /// Update a subsection
    Update {
        /// Subsection ID
        id: Uuid,

        /// New title
        title: String,

        /// Section ID the subsection belongs to
        section: Uuid,
    },

    /// Delete a subsection
    Delete {
        /// Subsection ID
        id: Uuid,
    },
}

/// Request body for create and update.
#[derive(Serialize)]
struct SubsectionRequest {
    title: String,
    section_id: Uuid,
}

/// Wire representation of a subsection.
#[derive(Debug, Deserialize, Serialize)]
pub struct SubsectionResponse {
    pub id: Uuid,
    pub title: String,
    pub section_id: Uuid,
    pub created: DateTime<Utc>,
}

/// List of subsections.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SubsectionList(pub Vec<SubsectionResponse>);

impl HumanReadable for SubsectionResponse {
    fn print_human(&self) {
        println!("{}", self.title.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Section:".cyan(), self.section_id);
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
    }
}

impl HumanReadable for SubsectionList {
    fn print_human(&self) {
        println!("{}", "Subsections".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No subsections)".dimmed());
            return;
        }

        for subsection in &self.0 {
            println!("  {} {}", subsection.id, subsection.title);
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the subsection command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SubsectionArgs,
) -> Result<()> {
    match args.action {
        SubsectionAction::List => {
            let url = format!("{}/api/subsections/", base_url);
            let response: SubsectionList = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        SubsectionAction::Create { title, section } => {
            let url = format!("{}/api/subsections/", base_url);
            let request_body = SubsectionRequest {
                title,
                section_id: section,
            };
            let response: SubsectionResponse =
                make_request(client.post(&url).json(&request_body)).await?;
            output(&response, human)
        }

        SubsectionAction::Get { id } => {
            let url = format!("{}/api/subsections/{}/", base_url, id);
            let response: SubsectionResponse = make_request(client.get(&url)).await?;
            output(&response, human)
        }

        SubsectionAction::Update { id, title, section } => {
            let url = format!("{}/api/subsections/{}/", base_url, id);
            let request_body = SubsectionRequest {
                title,
                section_id: section,
            };
            let response: SubsectionResponse =
                make_request(client.put(&url).json(&request_body)).await?;
            output(&response, human)
        }

        SubsectionAction::Delete { id } => {
            let url = format!("{}/api/subsections/{}/", base_url, id);
            make_empty_request(client.delete(&url)).await?;
            output(&Deleted { id }, human)
        }
    }
}
