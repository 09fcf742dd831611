//! LOGOUT command - Confirm logout.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{make_request, output, HumanReadable};

/// Response from logout.
#[derive(Debug, Deserialize, Serialize)]
pub struct LogoutResponse {
    pub detail: String,
}

impl HumanReadable for LogoutResponse {
    fn print_human(&self) {
        println!("{}", self.detail.green().bold());
        println!();
        println!("  {}", "Discard your tokens; they are not revoked server-side.".dimmed());
    }
}

/// Execute the logout command.
pub async fn execute(client: &reqwest::Client, base_url: &str, human: bool) -> Result<()> {
    let url = format!("{}/api/logout", base_url);

    let response: LogoutResponse = make_request(client.post(&url)).await?;

    output(&response, human)
}
