//! Query options: the [`Query`] trait and the parameter sets sent to the API.

mod auth;
pub use self::auth::AuthOptions;

use serde::Serialize;
use url::Url;

use crate::Error;

/// Trait implemented by every set of query options. Options are serialized
/// with `serde_urlencoded`; fields skipped during serialization never reach
/// the query string.
pub trait Query: Serialize {
    /// Replaces the query string of `url` with these options, returning the
    /// new URL. When no option survives serialization the URL has no query.
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let encoded = serde_urlencoded::to_string(self)?;
        let mut url = url.clone();
        if encoded.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&encoded));
        }
        Ok(url)
    }
}
