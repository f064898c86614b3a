use anyhow::Result;
use chrono::Local;
use colored::*;
use dialoguer::{Confirm, Input, Password};

mod app;
mod cli;
mod github;
mod pie_chart;
mod stats;
mod utils;

use crate::github::Client;

fn main() -> Result<()> {
    let args = cli::get_args();

    let username: String = match args.username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Enter the GitHub username")
            .interact_text()?,
    };
    let token: String = match args.token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Enter your GitHub Personal Access Token")
            .interact()?,
    };

    let client = Client::new(&token)?;

    println!("Fetching repositories for user: {}...", username);
    let started_at = Local::now();

    let repos = match client.list_repos(&username) {
        Ok(repos) => repos,
        Err(err) => {
            println!("{}", format!("An error occurred: {}", err).red());
            println!("Failed to retrieve language stats.");
            return Ok(());
        }
    };

    if repos.is_empty() {
        println!("No public repositories found for user '{}'.", username);
        return Ok(());
    }

    println!(
        "Found {} repositories. Calculating language stats...",
        repos.len()
    );

    let totals = github::collect_language_stats(&client, &repos);
    let shares = totals.shares();

    if shares.is_empty() {
        println!("No code was found to calculate percentages.");
        return Ok(());
    }

    let completed_at = Local::now();
    let elapsed = completed_at.signed_duration_since(started_at);

    println!();
    println!(
        "{}",
        "--- Language Distribution Across All Repositories ---".bold()
    );
    stats::print_distribution(&shares);
    println!();
    println!(
        "{} repositories, {} of code, fetched in {}.{:03}s",
        repos.len(),
        utils::bytes_to_human(totals.total_bytes()),
        elapsed.num_seconds(),
        (elapsed.num_milliseconds() % 1000).abs()
    );

    let show_chart = if args.no_chart {
        false
    } else if args.chart {
        true
    } else {
        Confirm::new()
            .with_prompt("Do you want to see this distribution as a pie chart?")
            .default(false)
            .interact()?
    };

    if show_chart {
        println!("\nDisplaying pie chart in a new window...");
        app::App::run(shares);
    }

    Ok(())
}
