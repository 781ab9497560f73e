use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "E-book storefront: cart, checkout and invoices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to storefront.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check out the built-in two-book sample cart
    Demo,

    /// Check out a basket JSON file and print the invoice
    Checkout {
        /// Basket file to load
        basket: PathBuf,

        /// Print the order as JSON instead of an invoice
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
