//! The `/me` endpoint.

use crate::{query::AuthOptions, routes::PROFILE_ROUTE, types::Profile, Client, Error};

/// Access to the authenticated user's profile. Obtained from
/// [`Client::profile`].
pub struct Profiles<'a> {
    client: &'a Client,
}

impl Client {
    pub fn profile(&self) -> Profiles<'_> {
        Profiles { client: self }
    }
}

impl Profiles<'_> {
    /// Fetches the caller's own profile. The route takes no query parameters,
    /// so credentials are not attached. A `null` body yields an empty profile.
    pub async fn get_own(&self) -> Result<Profile, Error> {
        let profile = self
            .client
            .get::<Option<Profile>, AuthOptions>(PROFILE_ROUTE, None)
            .await?;
        Ok(profile.unwrap_or_default())
    }
}
