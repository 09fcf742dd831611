//! Command-line client for the bookwriter API.
//!
//! Commands:
//! - signup / login / logout: account management
//! - book / section / subsection / collab: resource CRUD
//! - grant / revoke: collaboration edit access
//!
//! Configuration via environment:
//! - BOOKWRITER_URL: Base URL of the bookwriter server (default: http://localhost:8000)
//! - BOOKWRITER_TOKEN: JWT Bearer access token for authentication

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    access::{GrantArgs, RevokeArgs},
    books::BookArgs,
    collaborations::CollabArgs,
    login::LoginArgs,
    sections::SectionArgs,
    signup::SignupArgs,
    subsections::SubsectionArgs,
};

/// Bookwriter CLI
///
/// Interact with the book-authoring API from the command line. Outputs JSON
/// by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "bookwriter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Bookwriter server URL
    #[arg(
        long,
        env = "BOOKWRITER_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    url: String,

    /// JWT Bearer access token for authentication
    #[arg(long, env = "BOOKWRITER_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Signup(SignupArgs),

    /// Log in and obtain an access/refresh token pair
    Login(LoginArgs),

    /// Log out (confirmation only; discard your tokens)
    Logout,

    /// Manage books
    Book(BookArgs),

    /// Manage sections
    Section(SectionArgs),

    /// Manage subsections
    Subsection(SubsectionArgs),

    /// Manage collaborations
    Collab(CollabArgs),

    /// Grant edit access on a collaboration
    Grant(GrantArgs),

    /// Revoke edit access on a collaboration
    Revoke(RevokeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Signup(args) => {
            commands::signup::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Login(args) => commands::login::execute(&client, &cli.url, cli.human, args).await,
        Commands::Logout => commands::logout::execute(&client, &cli.url, cli.human).await,
        Commands::Book(args) => commands::books::execute(&client, &cli.url, cli.human, args).await,
        Commands::Section(args) => {
            commands::sections::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Subsection(args) => {
            commands::subsections::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Collab(args) => {
            commands::collaborations::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Grant(args) => {
            commands::access::execute_grant(&client, &cli.url, cli.human, args).await
        }
        Commands::Revoke(args) => {
            commands::access::execute_revoke(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
