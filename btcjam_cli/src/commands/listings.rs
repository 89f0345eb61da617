//! The `listings` subcommand: lists every open loan listing.

use anyhow::Result;
use btcjam_api::types::Listing;
use btcjam_api::Client;
use clap::Args;

use crate::output::{
    print_json, print_listings_csv, print_listings_markdown, print_listings_table, OutputFormat,
};

#[derive(Args)]
pub struct ListingsArgs {
    /// Only show listings with this status (e.g. Funding), case-insensitive
    #[arg(long)]
    pub status: Option<String>,
}

pub async fn run(args: &ListingsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut listings = client.listings().list_all().await?;

    if let Some(status) = &args.status {
        listings = filter_by_status(listings, status);
    }

    let unreadable = listings
        .iter()
        .filter(|l| l.data.amount_funded_error().is_some())
        .count();
    if unreadable > 0 {
        eprintln!(
            "warning: {} listing(s) had an unreadable amount funded, shown as 0",
            unreadable
        );
    }

    match format {
        OutputFormat::Table => print_listings_table(&listings),
        OutputFormat::Json => print_json(&listings),
        OutputFormat::Csv => print_listings_csv(&listings)?,
        OutputFormat::Markdown => print_listings_markdown(&listings),
    }

    Ok(())
}

fn filter_by_status(listings: Vec<Listing>, status: &str) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|l| l.data.listing_status.eq_ignore_ascii_case(status))
        .collect()
}
