use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pizzacraft::config::Config;

mod cmd;

#[derive(Parser)]
#[command(name = "pizzacraft")]
#[command(version, about = "PizzaCraft storefront client")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend API base URL (overrides config file and PIZZACRAFT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Data directory for cart, session, and config. Defaults to ~/.pizzacraft
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the ingredient catalog
    Menu {
        /// Restrict to one ingredient type: base, sauce, cheese, veggie
        #[arg(long)]
        kind: Option<String>,
    },
    /// Compose a custom pizza and add it to the cart
    Build,
    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        command: Option<CartCommands>,
    },
    /// Enter delivery details, pay, and place the order
    Checkout,
    /// List your past orders
    Orders,
    /// Show one order with its line items
    Order { id: String },
    /// Sign in
    Login,
    /// Create an account
    Register,
    /// Sign out
    Logout,
    /// Account recovery and email verification
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum CartCommands {
    /// List cart items with totals (default)
    List,
    /// Remove the item at a 1-based position
    Remove { index: usize },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand, Clone)]
pub enum AccountCommands {
    /// Request a password reset email
    ForgotPassword { email: String },
    /// Redeem an email verification token
    VerifyEmail { token: String },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
    /// Write a default config.toml
    Init,
}

/// Route logs to a file under the data dir so interactive prompts stay clean.
fn init_tracing(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::daily(&config.log_dir, "pizzacraft.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if config.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.data_dir.clone(), cli.api_url.clone(), cli.verbose)
        .context("Failed to load configuration")?;
    config.ensure_directories()?;
    let _log_guard = init_tracing(&config);

    match &cli.command {
        Commands::Menu { kind } => cmd::cmd_menu(&config, kind.as_deref()).await?,
        Commands::Build => cmd::cmd_build(&config).await?,
        Commands::Cart { command } => cmd::cmd_cart(&config, command.clone())?,
        Commands::Checkout => cmd::cmd_checkout(&config).await?,
        Commands::Orders => cmd::cmd_orders(&config).await?,
        Commands::Order { id } => cmd::cmd_order_detail(&config, id).await?,
        Commands::Login => cmd::cmd_login(&config).await?,
        Commands::Register => cmd::cmd_register(&config).await?,
        Commands::Logout => cmd::cmd_logout(&config)?,
        Commands::Account { command } => match command {
            AccountCommands::ForgotPassword { email } => {
                cmd::cmd_forgot_password(&config, email).await?
            }
            AccountCommands::VerifyEmail { token } => {
                cmd::cmd_verify_email(&config, token).await?
            }
        },
        Commands::Config { command } => cmd::cmd_config(&config, command.clone())?,
    }

    Ok(())
}
