//! Shared types for the inventory application.
//!
//! Holds the crate-wide `Result` alias and the command-line subcommands.
use clap::Subcommand;

use crate::{Availability, InventoryError};

/// A specialized Result type for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Available subcommands for the snappy application
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items with optional search and filters
    List {
        /// Case-insensitive text matched against name and description
        #[clap(short, long)]
        search: Option<String>,

        /// Only show items in this category
        #[clap(short, long)]
        category: Option<String>,

        /// Filter by availability
        #[clap(short, long, value_enum, default_value_t = Availability::All)]
        availability: Availability,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// View an item by ID
    View {
        /// ID of the item to view
        id: String,

        /// Format output as raw JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Create a new item
    Create {
        /// Name of the item
        #[clap(short, long)]
        name: String,

        /// Free text description
        #[clap(short, long, default_value = "")]
        description: String,

        /// Category used for grouping and filtering
        #[clap(short, long)]
        category: String,

        /// Units in stock
        #[clap(short, long, default_value_t = 0, allow_negative_numbers = true)]
        quantity: i64,

        /// Unit price
        #[clap(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        price: f64,

        /// Mark the item as unavailable
        #[clap(short, long)]
        unavailable: bool,
    },

    /// Update an existing item; omitted fields keep their current value
    Update {
        /// ID of the item to update
        id: String,

        /// New name
        #[clap(short, long)]
        name: Option<String>,

        /// New description
        #[clap(short, long)]
        description: Option<String>,

        /// New category
        #[clap(short, long)]
        category: Option<String>,

        /// New quantity
        #[clap(short, long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// New unit price
        #[clap(short, long, allow_negative_numbers = true)]
        price: Option<f64>,

        /// Set availability
        #[clap(short, long)]
        available: Option<bool>,
    },

    /// Delete an item by ID
    Delete {
        /// ID of the item to delete
        id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Show inventory totals and per-category breakdown
    Stats {
        /// Show category value instead of item count
        #[clap(short, long)]
        by_value: bool,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// List the categories in use
    Categories,

    /// Configuration management
    Config {
        /// Show current configuration
        #[clap(short = 'S', long)]
        show: bool,

        /// Update a configuration setting (key=value)
        #[clap(short, long)]
        set: Option<String>,

        /// Reset configuration to defaults
        #[clap(short, long)]
        reset: bool,
    },

    /// Drop the stored collection and re-seed the demo items
    Reset {
        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },
}

