//! Loan listings and the borrower summary embedded in them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{numeric::decode_raw_json_float, Error};

/// Numeric identifier for a listing.
pub type ListingID = i64;

/// One element of the `/listings` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "listing", default, deserialize_with = "null_as_default")]
    pub data: ListingData,
}

/// Reads an explicit `null` as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Terms, status and borrower of a single loan listing.
///
/// Every field is optional on the wire; missing or `null` fields take their
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ListingID,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Loan term in days.
    #[serde(rename = "term_days", deserialize_with = "null_as_default")]
    pub term: i64,

    pub description: Option<String>,

    /// Requested amount, as a decimal string.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,

    /// Amount funded so far. Filled in from the raw upstream value once the
    /// listing has been fetched; 0 when absent or unreadable.
    #[serde(skip_deserializing)]
    pub amount_funded: f64,

    /// `amount_funded` as sent by the API: an integer, a string or a float.
    #[serde(rename = "amount_funded", skip_serializing)]
    raw_amount_funded: Option<Value>,

    #[serde(skip)]
    amount_funded_error: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub number_of_payments: i64,

    /// Days between two payments.
    #[serde(rename = "payment_cycle_days", deserialize_with = "null_as_default")]
    pub payment_cycle: i64,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    /// Interest rate, as a decimal string.
    #[serde(deserialize_with = "null_as_default")]
    pub rate: String,

    #[serde(deserialize_with = "null_as_default")]
    pub periodic_payment_amount: f64,

    /// Currency code of `amount`, e.g. `BTC`.
    #[serde(deserialize_with = "null_as_default")]
    pub denominated_in: String,

    #[serde(deserialize_with = "null_as_default")]
    pub listing_status: String,

    #[serde(deserialize_with = "null_as_default")]
    pub is_secured: bool,

    pub loan_purpose: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub percent_secured: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub percent_funded: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub funding_threshold: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub listing_score: i64,

    /// The borrower.
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
}

impl ListingData {
    /// The raw `amount_funded` value, if the API sent one.
    pub fn raw_amount_funded(&self) -> Option<&Value> {
        self.raw_amount_funded.as_ref()
    }

    /// Why `amount_funded` was defaulted to 0, if its raw value could not be
    /// converted.
    pub fn amount_funded_error(&self) -> Option<&str> {
        self.amount_funded_error.as_deref()
    }

    /// Sets `amount_funded` from its raw value. On failure the field is 0 and
    /// the error is remembered on the listing as well as returned.
    pub fn resolve_amount_funded(&mut self) -> Result<(), Error> {
        self.amount_funded_error = None;
        let Some(raw) = &self.raw_amount_funded else {
            self.amount_funded = 0.0;
            return Ok(());
        };
        match decode_raw_json_float(raw) {
            Ok(value) => {
                self.amount_funded = value;
                Ok(())
            }
            Err(e) => {
                self.amount_funded = 0.0;
                self.amount_funded_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Borrower summary attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,

    #[serde(rename = "positive_count_reputation", deserialize_with = "null_as_default")]
    pub positive_rep_count: i64,

    #[serde(rename = "negative_count_reputation", deserialize_with = "null_as_default")]
    pub negative_rep_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub can_borrow: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub can_trade: bool,

    // Misspelled upstream.
    #[serde(rename = "bitcointalk_accound_verified", deserialize_with = "null_as_default")]
    pub btctalk_verified: bool,

    /// Numeric credit score, as a string.
    #[serde(rename = "btcjam_score_numeric", deserialize_with = "null_as_default")]
    pub btcjam_score: String,

    /// Letter grade, e.g. `A+`.
    #[serde(rename = "btcjam_score", deserialize_with = "null_as_default")]
    pub btcjam_code: String,

    #[serde(deserialize_with = "null_as_default")]
    pub address_verified: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub identity_verified: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub phone_verified: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub facebook_connected: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub facebook_friend_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub linkedin_connected: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub ebay_connected: bool,

    pub ebay_account_date: Option<String>,

    pub ebay_feedback_score: Option<String>,

    #[serde(rename = "paypal_verified_account_connected", deserialize_with = "null_as_default")]
    pub paypal_connected: bool,

    pub paypal_account_date: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub repaid_loans_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub repaid_loans_amount: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub late_loans_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub late_loans_amount: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub open_credit_lines_count: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub open_credit_lines_amount: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub made_late_payments: i64,
}
