//! SIGNUP command - Register a new user.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{make_request, output, HumanReadable};

/// Arguments for the signup command.
#[derive(Args)]
pub struct SignupArgs {
    /// Username (3-30 characters, starts with a letter)
    pub username: String,

    /// Email address
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,

    /// Role: "author" or "collaborator" (default: collaborator)
    #[arg(long)]
    pub role: Option<String>,
}

/// Request body for registration.
#[derive(Serialize)]
struct SignupRequest {
    username: String,
    email: String,
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

/// Response from registration.
#[derive(Debug, Deserialize, Serialize)]
pub struct SignupResponse {
    pub success: String,
    pub response: CreatedUser,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreatedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl HumanReadable for SignupResponse {
    fn print_human(&self) {
        println!("{}", self.success.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.response.id);
        println!("  {} {}", "Username:".cyan(), self.response.username);
        println!("  {} {}", "Email:".cyan(), self.response.email);
        println!("  {} {}", "Role:".cyan(), self.response.role);
    }
}

/// Execute the signup command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SignupArgs,
) -> Result<()> {
    let url = format!("{}/api/signup", base_url);

    let request_body = SignupRequest {
        username: args.username,
        email: args.email,
        password: args.password,
        role: args.role,
    };

    let response: SignupResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
