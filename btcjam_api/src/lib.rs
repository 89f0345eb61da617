//! Typed client for the BTCJam peer-to-peer lending API.
//!
//! ```no_run
//! # async fn run() -> Result<(), btcjam_api::Error> {
//! let client = btcjam_api::Client::new()?.with_authentication("app-id", "app-secret");
//! for listing in client.listings().list_all().await? {
//!     println!("{} {}", listing.data.id, listing.data.amount_funded);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod listings;
mod numeric;
mod profile;
mod query;
pub mod routes;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::listings::Listings;
pub use self::numeric::decode_raw_json_float;
pub use self::profile::Profiles;
pub use self::query::{AuthOptions, Query};
