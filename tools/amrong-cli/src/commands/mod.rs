//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod forms;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product id from `amrong menu`.
    pub product: String,
}

/// Arguments for the custom command.
#[derive(Args)]
pub struct CustomArgs {
    /// Chicken type: original, spicy or garlic.
    #[arg(short = 't', long = "type", default_value = "original")]
    pub chicken_type: String,

    /// Spice level: mild, medium or extra-hot.
    #[arg(short, long, default_value = "mild")]
    pub spice: String,

    /// Number of pieces.
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub quantity: String,

    /// Anything the kitchen should know.
    #[arg(short, long, default_value = "")]
    pub instructions: String,
}

/// A single cart line.
#[derive(Args)]
pub struct LineArgs {
    /// Item id as shown by `amrong cart`.
    pub id: String,
}

/// Arguments for the set command.
#[derive(Args)]
pub struct SetArgs {
    /// Item id as shown by `amrong cart`.
    pub id: String,

    /// New quantity. Values below 1 are ignored.
    #[arg(allow_hyphen_values = true)]
    pub quantity: i64,
}

/// Arguments for commands that empty the cart.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the reserve command.
#[derive(Args)]
pub struct ReserveArgs {
    /// Name for the booking.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact email.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Date of the visit.
    #[arg(long, default_value = "")]
    pub date: String,

    /// Time of the visit.
    #[arg(long, default_value = "")]
    pub time: String,

    /// Party size.
    #[arg(long, default_value = "")]
    pub guests: String,

    /// Phone number we call to confirm.
    #[arg(long, default_value = "")]
    pub phone: String,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Where we reply.
    #[arg(long, default_value = "")]
    pub email: String,

    /// The message.
    #[arg(long, default_value = "")]
    pub message: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Get a config value.
    Get {
        /// Config key (e.g., "storage.dir").
        key: String,
    },

    /// Set a config value.
    Set {
        /// Config key.
        key: String,
        /// Config value.
        value: String,
    },

    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration.
    Validate,
}
