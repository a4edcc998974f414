//! Kolibra CLI - Content scaffolding tools.
//!
//! # Usage
//!
//! ```bash
//! # Scaffold a full content flow (Instagram caption, blog article, offer page)
//! kolibra-cli content post --title "Identidade visual para padarias" \
//!     --category branding --summary "Como uma marca forte muda seu negócio"
//! ```
//!
//! # Commands
//!
//! - `content post` - Generate the three linked content drafts for one campaign

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kolibra-cli")]
#[command(author, version, about = "Kolibra Solutions CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold marketing content
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    /// Generate the Instagram caption, blog article, and offer page drafts
    /// for one campaign
    Post {
        /// Campaign title
        #[arg(short, long)]
        title: String,

        /// Content category (e.g. branding, web, suporte)
        #[arg(short, long)]
        category: String,

        /// One-sentence summary used across the drafts
        #[arg(short, long)]
        summary: String,

        /// Output directory
        #[arg(short, long, default_value = "content")]
        out: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Content { action } => match action {
            ContentAction::Post {
                title,
                category,
                summary,
                out,
            } => {
                commands::content::post(&title, &category, &summary, &out).await?;
            }
        },
    }
    Ok(())
}
