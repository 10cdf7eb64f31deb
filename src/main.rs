use anyhow::Result;
use clap::{Parser, Subcommand};
use github_agent::commands::*;
use github_agent::{config::Settings, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-agent")]
#[command(about = "GitHub REST tools for natural-language agents")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to github-agent.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's repositories
    Repos {
        /// GitHub username
        username: String,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Create an issue in a repository
    Issue {
        /// Repository owner
        owner: String,

        /// Repository name
        repo: String,

        /// Issue title
        #[arg(long)]
        title: String,

        /// Issue body
        #[arg(long, default_value = "")]
        body: String,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Search code with GitHub code search syntax
    Search {
        /// Search query
        query: String,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Show repository details
    Info {
        /// Repository owner
        owner: String,

        /// Repository name
        repo: String,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Print the agent manifest (model settings and tool schemas) as JSON
    Tools,

    /// Invoke a tool by name with JSON arguments, as an agent would
    Call {
        /// Tool name, e.g. get_user_repositories
        tool: String,

        /// Tool arguments as a JSON object
        arguments: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Variables already in the environment are not overridden
    let env_file = dotenvy::dotenv().ok();

    logging::init(cli.verbose);
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    // Credentials are checked before any network activity
    let settings = Settings::load(cli.config.as_deref())?;
    let context = CommandContext::new(settings);

    execute_command(cli.command, &context)
}

fn execute_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Repos { username, json } => ReposCommand { username, json }.execute(context),
        Commands::Issue {
            owner,
            repo,
            title,
            body,
            json,
        } => IssueCommand {
            owner,
            repo,
            title,
            body,
            json,
        }
        .execute(context),
        Commands::Search { query, json } => SearchCommand { query, json }.execute(context),
        Commands::Info { owner, repo, json } => InfoCommand { owner, repo, json }.execute(context),
        Commands::Tools => ToolsCommand.execute(context),
        Commands::Call { tool, arguments } => CallCommand { tool, arguments }.execute(context),
    }
}
