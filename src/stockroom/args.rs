use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", version)]
#[command(about = "File-backed inventory manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file (defaults to the data-file setting, then inventory.csv)
    #[arg(short, long, global = true, env = "STOCKROOM_FILE")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all products
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Print fixed-width rows without alignment or truncation
        #[arg(long, conflicts_with = "json")]
        plain: bool,
    },

    /// Register a new product
    #[command(alias = "a")]
    Add {
        /// Unique product id
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Product name
        name: String,

        /// Units in stock
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: i64,
    },

    /// Find a product by id or by part of its name
    #[command(aliases = ["s", "find"])]
    #[command(group(ArgGroup::new("query").required(true).args(["id", "term"])))]
    Search {
        /// Exact product id
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,

        /// Text contained in the name (case-sensitive)
        term: Option<String>,

        /// Show every match instead of the first one
        #[arg(long)]
        all: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a product's name, quantity or price
    #[command(alias = "u")]
    Update {
        /// Id of the product to change
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// New price
        #[arg(long, allow_negative_numbers = true)]
        price: Option<i64>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Remove {
        /// Id of the product to delete
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
