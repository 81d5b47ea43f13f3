//! Promptitude CLI - manage a remote prompt library
//!
//! Terminal front-end over the prompt list controller.

mod auth;
mod config;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Password};
use tracing_subscriber::EnvFilter;

use promptitude::{
    AuthSession, GraphQlPromptStore, PromptError, PromptField, PromptId, PromptListController,
};

use auth::ConfigSession;
use config::Config;

#[derive(Parser)]
#[command(name = "promptitude")]
#[command(about = "Promptitude CLI - manage a remote prompt library", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the API endpoint and key
    Login {
        /// GraphQL endpoint URL (will prompt if not provided)
        #[arg(short, long)]
        endpoint: Option<String>,
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Forget the stored API key
    Logout,

    /// List prompts, most recent first
    List,

    /// Create a new prompt
    Create {
        /// Prompt name
        #[arg(long)]
        name: Option<String>,
        /// Prompt text
        #[arg(long)]
        prompt: Option<String>,
        /// Prompt description
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit an existing prompt field by field
    Edit {
        /// Prompt ID
        id: String,
    },

    /// Delete a prompt
    Delete {
        /// Prompt ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "promptitude=debug"
    } else {
        "promptitude=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Login { endpoint, key } => cmd_login(endpoint, key).await,
        Commands::Logout => cmd_logout().await,
        Commands::List => cmd_list().await,
        Commands::Create {
            name,
            prompt,
            description,
        } => cmd_create(name, prompt, description).await,
        Commands::Edit { id } => cmd_edit(id).await,
        Commands::Delete { id, yes } => cmd_delete(id, yes).await,
        Commands::Config => cmd_config(),
    }
}

/// Build a controller wired to the configured endpoint.
fn controller(config: &Config) -> Result<PromptListController> {
    let (endpoint, api_key) = config.credentials()?;
    let store = Arc::new(GraphQlPromptStore::new(endpoint, api_key));
    Ok(PromptListController::new(store))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(endpoint: Option<String>, key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let endpoint = match endpoint.or_else(|| config.endpoint.clone()) {
        Some(url) => url,
        None => Input::new()
            .with_prompt("GraphQL endpoint URL")
            .interact_text()
            .context("Failed to read endpoint")?,
    };

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test the credentials with a one-record list
    let store = Arc::new(GraphQlPromptStore::new(&endpoint, &api_key));
    let mut probe = PromptListController::new(store);
    print!("Testing connection... ");

    match probe.load().await {
        Ok(()) => println!("{}", "OK".green()),
        Err(err) => {
            println!("{}", "Failed".red());
            bail!("Could not reach the prompt API: {}", err);
        }
    }

    config.endpoint = Some(endpoint);
    config.api_key = Some(api_key);
    config.save()?;

    println!("{} Credentials saved to {:?}", "✓".green(), Config::config_path()?);
    Ok(())
}

async fn cmd_logout() -> Result<()> {
    ConfigSession.sign_out().await;
    println!("{} Signed out", "✓".green());
    Ok(())
}

async fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let mut controller = controller(&config)?;
    controller.load().await?;

    if controller.prompts().is_empty() {
        println!("No prompts found.");
        println!("\n{}", "Create one with:".dimmed());
        println!("  promptitude create");
        return Ok(());
    }

    println!("{}", "Prompts:".bold());
    for prompt in controller.prompts() {
        let created = prompt
            .created_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {} [{}]",
            prompt.id.to_string().dimmed(),
            prompt.name.cyan().bold(),
            created.dimmed()
        );
        println!("    {}", prompt.prompt);
        println!("    {}", prompt.description.dimmed());
    }
    Ok(())
}

async fn cmd_create(
    name: Option<String>,
    prompt: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let mut controller = controller(&config)?;

    let name = field_value(name, "Prompt Name")?;
    let prompt = field_value(prompt, "Prompt")?;
    let description = field_value(description, "Prompt Desc")?;

    controller.set_field(PromptField::Name, name);
    controller.set_field(PromptField::Prompt, prompt);
    controller.set_field(PromptField::Description, description);

    if !controller.draft().is_complete() {
        return Err(PromptError::Validation(
            "all three fields (name, prompt, description) are required".to_string(),
        )
        .into());
    }

    controller.create().await?;
    let created = controller
        .prompts()
        .first()
        .map(|p| p.id.to_string())
        .unwrap_or_default();
    println!("{} Prompt created ({})", "✓".green(), created.dimmed());
    Ok(())
}

async fn cmd_edit(id: String) -> Result<()> {
    let config = Config::load()?;
    let mut controller = controller(&config)?;
    controller.load().await?;

    let id = PromptId::from(id);
    let record = controller
        .prompts()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .with_context(|| format!("Prompt '{}' not found", id))?;

    controller.enter_edit_mode(id.clone());

    let revisions = [
        (PromptField::Name, "Name", record.name),
        (PromptField::Prompt, "Prompt", record.prompt),
        (PromptField::Description, "Description", record.description),
    ];
    for (field, label, current) in revisions {
        let value: String = Input::new()
            .with_prompt(label)
            .with_initial_text(current)
            .interact_text()
            .with_context(|| format!("Failed to read {}", field))?;
        controller.set_field(field, value);
    }

    controller.update(&id).await?;
    println!("{} Prompt '{}' updated", "✓".green(), id);
    Ok(())
}

async fn cmd_delete(id: String, yes: bool) -> Result<()> {
    let config = Config::load()?;
    let mut controller = controller(&config)?;
    controller.load().await?;

    let id = PromptId::from(id);
    let name = controller
        .prompts()
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .with_context(|| format!("Prompt '{}' not found", id))?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete prompt '{}'?", name))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    // On failure the controller rolls the record back and the error
    // propagates to the top-level reporter.
    controller.delete(&id).await?;
    println!("{} Prompt '{}' deleted", "✓".green(), name);
    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path:     {:?}", Config::config_path()?);
    println!(
        "  Endpoint: {}",
        config.endpoint.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  API key:  {}",
        if config.api_key.is_some() {
            "set".green().to_string()
        } else {
            "(not set)".to_string()
        }
    );
    Ok(())
}

fn field_value(arg: Option<String>, label: &str) -> Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(label)
            .interact_text()
            .with_context(|| format!("Failed to read {}", label)),
    }
}
