//! The `/listings` endpoint.

use crate::{routes::LISTINGS_ROUTE, types::Listing, Client, Error};

/// Access to loan listings. Obtained from [`Client::listings`].
pub struct Listings<'a> {
    client: &'a Client,
}

impl Client {
    pub fn listings(&self) -> Listings<'_> {
        Listings { client: self }
    }
}

impl Listings<'_> {
    /// Fetches every open listing, authenticating with the client's
    /// credentials when they are set.
    ///
    /// `amount_funded` is normalized on each listing afterwards. A listing
    /// whose raw value cannot be converted keeps 0 and records the failure
    /// (see [`ListingData::amount_funded_error`](crate::types::ListingData::amount_funded_error))
    /// instead of failing the whole batch.
    pub async fn list_all(&self) -> Result<Vec<Listing>, Error> {
        let mut listings: Vec<Listing> = self
            .client
            .get(LISTINGS_ROUTE, self.client.authentication())
            .await?;
        resolve_amounts_funded(&mut listings);
        Ok(listings)
    }
}

fn resolve_amounts_funded(listings: &mut [Listing]) {
    for listing in listings.iter_mut() {
        if let Err(e) = listing.data.resolve_amount_funded() {
            tracing::warn!(
                listing_id = listing.data.id,
                "Using 0 for amount_funded: {}",
                e
            );
        }
    }
}
