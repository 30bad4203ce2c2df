mod client;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use common::ContactSubmission;
use console::style;

use client::{DEFAULT_ENDPOINT, Outcome};

#[derive(Parser)]
#[command(name = "folio", version, about = "Folio contact form from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a message to the site owner
    Send(SendArgs),
}

#[derive(Args)]
struct SendArgs {
    /// Your name
    #[arg(long)]
    name: String,

    /// Address the owner can reply to
    #[arg(long)]
    email: String,

    /// Message text
    #[arg(long, required_unless_present = "message_file", conflicts_with = "message_file")]
    message: Option<String>,

    /// Read the message text from a file
    #[arg(long, value_name = "PATH")]
    message_file: Option<PathBuf>,

    /// Contact endpoint URL
    #[arg(long, env = "FOLIO_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Send(args) => send(args),
    }
}

fn send(args: SendArgs) -> anyhow::Result<ExitCode> {
    let message = match (args.message, args.message_file) {
        (Some(message), _) => message,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("either --message or --message-file is required"),
    };

    let submission = ContactSubmission::new(args.name, args.email, message);
    submission
        .validate()
        .context("Submission would be rejected")?;

    let outcome = client::submit(
        &args.endpoint,
        &submission,
        Duration::from_secs(args.timeout),
    )?;

    match outcome {
        Outcome::Sent { message } => {
            println!("{} {}", style("✓").green().bold(), message);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failed {
            status,
            error,
            details,
        } => {
            eprintln!(
                "{} {} {}",
                style("✗").red().bold(),
                error,
                style(format!("(HTTP {status})")).dim()
            );
            if let Some(details) = details {
                eprintln!("  {}", details);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
