use clap::{Parser, Subcommand};

use crate::storage::DEFAULT_CONTACTS_PATH;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Parser, Debug)]
#[command(name = "rolodex-web", version, about = "Personal contact directory")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the JSON file contacts are persisted to
    #[arg(long, env = "CONTACTS_PATH", default_value_t = String::from(DEFAULT_CONTACTS_PATH))]
    pub contacts_path: String,

    /// Socket address the server listens on
    #[arg(long, global = true, env = "ROLODEX_ADDR", default_value_t = String::from(DEFAULT_ADDR))]
    pub addr: String,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the contact directory over HTTP
    Serve,
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long, default_value_t)]
        phone: String,

        /// Contact email address
        #[arg(long, default_value_t)]
        email: String,

        /// Contact postal address
        #[arg(long, default_value_t)]
        address: String,
    },
    /// List contacts in insertion order
    List,
    /// Look up a contact by its exact name (case is ignored)
    Search {
        #[arg(long)]
        name: String,
    },
    /// Replace every field of an existing contact
    /// Fields left out are blanked
    Update {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Name after the update (repeat the current name to keep it)
        #[arg(long)]
        new_name: String,

        #[arg(long, default_value_t)]
        phone: String,

        #[arg(long, default_value_t)]
        email: String,

        #[arg(long, default_value_t)]
        address: String,
    },
    /// Delete the first contact with this name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
}
