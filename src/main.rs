use anyhow::{Context, Result};
use clap::Parser;
use std::net::IpAddr;
use tracing::info;

use gptlife::chat::ChatTurn;
use gptlife::coach::LifeCoach;
use gptlife::web_server;

// Define the command-line interface structure using clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// Define the available subcommands
#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start the coaching web server.
    Serve {
        #[arg(long, default_value = "0.0.0.0", help = "Address for the web server.")]
        host: IpAddr,
        #[arg(long, default_value_t = 7860, help = "Port for the web server.")]
        port: u16,
    },
    /// Engage in a text-based coaching session in the terminal.
    Chat,
}

// The main entry point of the application, using tokio's async runtime
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for environment variables like API keys)
    dotenvy::dotenv().ok();

    // Initialize tracing (logging) subscriber
    // Reads log level from RUST_LOG environment variable (e.g., RUST_LOG=info,gptlife=debug)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            info!("Starting web server on {}:{}...", host, port);
            web_server::start_web_server(host, port)
                .await
                .context("Web server failed")?;
        }
        Commands::Chat => {
            info!("Starting interactive coaching session...");
            run_terminal_chat().await?;
            info!("Coaching session finished.");
        }
    }

    Ok(())
}

/// Line-based coaching loop against stdin. An empty line or EOF ends the
/// session; history accumulates for the lifetime of the session only.
async fn run_terminal_chat() -> Result<()> {
    let coach = LifeCoach::from_env();
    let mut history: Vec<ChatTurn> = Vec::new();

    println!("GPT-Life coach. Ask about habits, routines, or goals (empty line to quit).");
    loop {
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim().to_string();
        if message.is_empty() {
            break;
        }

        let reply = coach.advise(&message, &history).await;
        println!("{}\n", reply);
        history.push(ChatTurn::new(message, reply));
    }
    Ok(())
}
