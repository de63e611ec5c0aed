use crate::config::{DEFAULT_CONTACTS_FILE, DEFAULT_HOST, DEFAULT_PORT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "contact-book",
    version,
    about = "Personal contact book with a terminal menu and a REST service"
)]
pub struct Cli {
    /// JSON file the contacts are kept in
    #[arg(long, global = true, env = "CONTACTS_FILE", default_value = DEFAULT_CONTACTS_FILE)]
    pub file: PathBuf,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal menu
    Menu,

    /// Serve the REST API
    Serve {
        /// Interface to bind
        #[arg(long, env = "CONTACTS_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, env = "CONTACTS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// List contacts
    List {
        /// Order by name (default is stored order)
        #[arg(long)]
        sort: bool,
    },

    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,
    },

    /// Search name, phone and email for a piece of text
    Search {
        query: String,
    },

    /// Edit an existing contact
    /// Omitted fields keep their current value
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,

        /// Update email address
        #[arg(long)]
        new_email: Option<String>,
    },

    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<PathBuf>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<PathBuf>,
    },
}
