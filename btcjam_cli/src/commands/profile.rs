//! The `profile` subcommand: shows the authenticated user's profile.

use anyhow::Result;
use btcjam_api::Client;

use crate::output::print_json;

/// Profiles carry no tabular fields, so every output format prints JSON.
pub async fn run(client: &Client) -> Result<()> {
    let profile = client.profile().get_own().await?;
    print_json(&profile);
    Ok(())
}
