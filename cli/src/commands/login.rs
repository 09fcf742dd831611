//! LOGIN command - Authenticate and obtain a token pair.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{make_request, output, HumanReadable};

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Username
    pub username: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

/// Request body for login.
#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

/// Response from login.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub detail: String,
    pub response: LoginTokens,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginTokens {
    pub id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl HumanReadable for LoginResponse {
    fn print_human(&self) {
        println!("{}", self.detail.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.response.id);
        println!("  {} {}", "Email:".cyan(), self.response.email);
        println!();
        println!("  {}", "Access token:".cyan());
        println!("    {}", self.response.access_token);
        println!("  {}", "Refresh token:".cyan());
        println!("    {}", self.response.refresh_token);
        println!();
        println!(
            "  {}",
            "export BOOKWRITER_TOKEN=<access token> to authenticate further commands".dimmed()
        );
    }
}

/// Execute the login command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let url = format!("{}/api/login", base_url);

    let request_body = LoginRequest {
        username: args.username,
        password: args.password,
    };

    let response: LoginResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
