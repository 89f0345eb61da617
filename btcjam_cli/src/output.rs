use anyhow::Result;
use btcjam_api::types::Listing;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to `Table`.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ListingRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Funded")]
    #[serde(rename = "Funded")]
    funded: String,
    #[tabled(rename = "% Funded")]
    #[serde(rename = "% Funded")]
    percent_funded: i64,
    #[tabled(rename = "Rate")]
    #[serde(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Term")]
    #[serde(rename = "Term")]
    term: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
}

fn build_listing_rows(listings: &[Listing]) -> Vec<ListingRow> {
    listings
        .iter()
        .map(|l| {
            let d = &l.data;
            ListingRow {
                id: d.id,
                title: d.title.clone(),
                amount: format_amount(&d.amount, &d.denominated_in),
                funded: format_funded(d.amount_funded, d.amount_funded_error().is_some()),
                percent_funded: d.percent_funded,
                rate: if d.rate.is_empty() {
                    String::new()
                } else {
                    format!("{}%", d.rate)
                },
                term: format!("{}d", d.term),
                status: d.listing_status.clone(),
                score: d.user.btcjam_code.clone(),
            }
        })
        .collect()
}

pub fn print_listings_table(listings: &[Listing]) {
    println!("{}", Table::new(build_listing_rows(listings)));
}

pub fn print_listings_markdown(listings: &[Listing]) {
    let mut table = Table::new(build_listing_rows(listings));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_listings_csv(listings: &[Listing]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_listing_rows(listings) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_amount(amount: &str, currency: &str) -> String {
    match (amount.is_empty(), currency.is_empty()) {
        (true, _) => String::new(),
        (false, true) => amount.to_string(),
        (false, false) => format!("{} {}", amount, currency),
    }
}

/// Unreadable upstream values are marked with `?`.
fn format_funded(value: f64, unreadable: bool) -> String {
    if unreadable {
        format!("{:.4}?", value)
    } else {
        format!("{:.4}", value)
    }
}
