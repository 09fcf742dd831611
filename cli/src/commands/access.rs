//! GRANT / REVOKE commands - Change a collaboration's edit access.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{make_request, output, HumanReadable};

/// Arguments for the grant command.
#[derive(Args)]
pub struct GrantArgs {
    /// Collaboration ID to grant edit access on
    pub collaboration_id: Uuid,
}

/// Arguments for the revoke command.
#[derive(Args)]
pub struct RevokeArgs {
    /// Collaboration ID to revoke edit access from
    pub collaboration_id: Uuid,
}

/// Request body for grant/revoke. The server's wire contract calls the
/// collaboration id `collaborator_id`.
#[derive(Serialize)]
struct AccessRequest {
    collaborator_id: Uuid,
}

/// Response from grant/revoke.
#[derive(Debug, Deserialize, Serialize)]
pub struct AccessMessage {
    pub message: String,
}

impl HumanReadable for AccessMessage {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the grant command.
pub async fn execute_grant(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GrantArgs,
) -> Result<()> {
    let url = format!("{}/api/grant-access/", base_url);
    let request_body = AccessRequest {
        collaborator_id: args.collaboration_id,
    };

    let response: AccessMessage = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}

/// Execute the revoke command.
pub async fn execute_revoke(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RevokeArgs,
) -> Result<()> {
    let url = format!("{}/api/revoke-access/", base_url);
    let request_body = AccessRequest {
        collaborator_id: args.collaboration_id,
    };

    let response: AccessMessage = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}
