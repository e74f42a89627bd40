// Polis CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: List commands drive a real ListController rather than raw
// gateway calls, so the binary exercises the load/search/paginate path end to
// end.

mod commands;
mod output;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "polis")]
#[command(about = "Polis CLI - Manage students, teachers, and courses")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(long, env = "POLIS_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage students
    Students {
        #[command(subcommand)]
        command: commands::students::StudentsCommand,
    },

    /// Manage teachers
    Teachers {
        #[command(subcommand)]
        command: commands::teachers::TeachersCommand,
    },

    /// Manage courses
    Courses {
        #[command(subcommand)]
        command: commands::courses::CoursesCommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = polis_client::ApiClient::new(&cli.api_url)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    match cli.command {
        Commands::Students { command } => {
            commands::students::run(command, &client, cli.output, cli.quiet).await
        }
        Commands::Teachers { command } => {
            commands::teachers::run(command, &client, cli.output, cli.quiet).await
        }
        Commands::Courses { command } => {
            commands::courses::run(command, &client, cli.output, cli.quiet).await
        }
    }
}
