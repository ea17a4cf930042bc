//! Amrong CLI - order from the Amrong Chicken storefront in a terminal.
//!
//! Commands:
//! - `amrong menu` - Show the menu
//! - `amrong add` / `amrong custom` - Put items in the cart
//! - `amrong cart`, `inc`, `dec`, `set`, `remove` - Review and edit the cart
//! - `amrong checkout` / `amrong clear` - Finish or abandon the order
//! - `amrong reserve` / `amrong contact` - Book a table, send a message
//! - `amrong config` - Manage configuration
//!
//! Each invocation is one storefront session: the cart is loaded from the
//! storage directory, the command runs, and every change is written back.

mod commands;
mod config;
mod context;
mod output;

use amrong_commerce::CommerceError;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{
    AddArgs, CheckoutArgs, ConfigArgs, ContactArgs, CustomArgs, LineArgs, ReserveArgs, SetArgs,
};

/// Amrong CLI - order chicken from your terminal
#[derive(Parser)]
#[command(name = "amrong")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu
    Menu,

    /// Add one of a menu item to the cart
    Add(AddArgs),

    /// Build a custom chicken order
    Custom(CustomArgs),

    /// Show the cart
    Cart,

    /// One more of a cart line
    Inc(LineArgs),

    /// One less of a cart line
    Dec(LineArgs),

    /// Set the quantity of a cart line
    Set(SetArgs),

    /// Remove a cart line
    Remove(LineArgs),

    /// Place the order and empty the cart
    Checkout(CheckoutArgs),

    /// Empty the cart without ordering
    Clear(CheckoutArgs),

    /// Reserve a table
    Reserve(ReserveArgs),

    /// Send us a message
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    ctx.output.debug(&format!("Storage: {}", ctx.storage_dir().display()));

    // Execute command
    let result = match cli.command {
        Commands::Menu => commands::shop::menu(&ctx),
        Commands::Add(args) => commands::shop::add(args, &ctx),
        Commands::Custom(args) => commands::shop::custom(args, &ctx),
        Commands::Cart => commands::cart::show(&ctx),
        Commands::Inc(args) => commands::cart::increment(args, &ctx),
        Commands::Dec(args) => commands::cart::decrement(args, &ctx),
        Commands::Set(args) => commands::cart::set(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Checkout(args) => commands::cart::checkout(args, &ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Reserve(args) => commands::forms::reserve(args, &ctx),
        Commands::Contact(args) => commands::forms::contact(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        // Customer-facing failures were already shown as notifications.
        let shown = e
            .downcast_ref::<CommerceError>()
            .map_or(false, CommerceError::is_user_facing);
        if !shown {
            ctx.output.error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
