// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the search through a SearchSession
// 3. Print the results (table or JSON) or a user-facing error
// 4. Exit with proper code (0 = matches found, 1 = no matches, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod api; // src/api/ - typed request descriptors + HTTP client
mod cli; // src/cli.rs - command-line parsing
mod search; // src/search/ - search sessions and staleness handling

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method

use api::ApiClient;
use cli::{Cli, Commands};
use search::{SearchListing, SearchSession};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Main application logic
// Returns:
//   Ok(0) = matches found and printed
//   Ok(1) = search succeeded but matched nothing
//   Ok(2) = the search failed (server error, bad response, no network, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { term, json, limit } => handle_search(&term, json, limit).await,
    }
}

// Handles the 'search' subcommand
// Parameters:
//   term: the search term (encoded into the query by the request layer)
//   json: whether to output JSON format
//   limit: optional cap on how many rows to display
async fn handle_search(term: &str, json: bool, limit: Option<usize>) -> Result<i32> {
    if !json {
        println!("🔍 Searching GitHub repositories for: {}", term);
    }

    let session = SearchSession::new(ApiClient::new());

    // A one-shot CLI issues a single search, so the result can never be
    // stale; a long-lived caller would subscribe() and issue many.
    let Some(update) = session.search(term).await else {
        eprintln!("❌ Search was superseded before it completed");
        return Ok(2);
    };

    match update.outcome {
        Ok(listing) => {
            print_listing(&listing, json, limit)?;
            if listing.items.is_empty() {
                Ok(1)
            } else {
                Ok(0)
            }
        }
        Err(description) => {
            // The core hands us a user-facing description; render it
            // instead of burying it in a log
            eprintln!("❌ Search failed: {}", description);
            Ok(2)
        }
    }
}

// Prints the listing either as a table or JSON
fn print_listing(listing: &SearchListing, json: bool, limit: Option<usize>) -> Result<()> {
    if json {
        // Serialize the whole listing and print
        let json_output = serde_json::to_string_pretty(listing)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(listing, limit);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(listing: &SearchListing, limit: Option<usize>) {
    if listing.items.is_empty() {
        println!("⚠️  No repositories matched");
        return;
    }

    let shown = limit.unwrap_or(listing.items.len()).min(listing.items.len());

    // Print table header
    println!("{:<40} {:<60}", "NAME", "URL");
    println!("{}", "=".repeat(100));

    for repository in &listing.items[..shown] {
        // Truncate the name if too long for display
        let name_display = if repository.name.len() > 37 {
            format!("{}...", &repository.name[..37])
        } else {
            repository.name.clone()
        };

        println!("{:<40} {:<60}", name_display, repository.html_url);
    }

    println!();

    // Print summary
    println!("📊 Summary:");
    println!("   📋 Total matches: {}", listing.total_count);
    println!("   👁  Shown: {}", shown);

    if listing.incomplete_results {
        println!("   ⚠️  The server reported incomplete results (search timed out)");
    }
}
