use crate::storage::DEFAULT_SERVICE_URL;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Phonebook backed by a REST contact service")]
pub struct Cli {
    /// Url of the contact collection on the phonebook service
    #[arg(long, env = "PHONEBOOK_URL", default_value = DEFAULT_SERVICE_URL)]
    pub url: String,

    /// Storage choice (remote, mem) are available
    #[arg(long = "storage", env = "STORAGE_CHOICE", default_value_t = String::from("remote"))]
    pub storage_choice: String,

    /// Seconds to wait for the phonebook service before giving up
    #[arg(long, env = "PHONEBOOK_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    List {
        /// Show only contacts whose first name starts with this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Add a contact, or replace the number of the contact already using
    /// this name (ignoring case)
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long, default_value_t = String::new())]
        number: String,

        /// Answer yes to the replace prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a contact by name or id
    Delete {
        /// Name of contact to delete (ignoring case)
        #[arg(long, required_unless_present = "id", conflicts_with = "id")]
        name: Option<String>,

        /// Id of contact to delete
        #[arg(long)]
        id: Option<String>,

        /// Answer yes to the delete prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive menu: filter, add, delete and list until exit
    Shell,
}
