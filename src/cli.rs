// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-lookout",
    version = "0.1.0",
    about = "A CLI tool to search GitHub repositories and list the matching results",
    long_about = "repo-lookout queries the public GitHub repository search API and prints \
                  the matching repositories (name and URL) as a table or JSON."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search GitHub repositories matching a term
    ///
    /// Example: repo-lookout search "http client" --limit 10
    Search {
        /// The search term (spaces and special characters are fine -
        /// they are percent-encoded before hitting the API)
        term: String,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Maximum number of rows to display (the rest are hidden,
        /// this is display truncation, not pagination)
        #[arg(long)]
        limit: Option<usize>,
    },
}
