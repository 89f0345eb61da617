use std::fmt;

use serde::Serialize;

use super::Query;

/// Application credentials, sent as the `appid` and `secret` query
/// parameters. Empty values are left out of the query string.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthOptions {
    #[serde(rename = "appid", skip_serializing_if = "String::is_empty")]
    pub application_id: String,

    #[serde(rename = "secret", skip_serializing_if = "String::is_empty")]
    pub application_secret: String,
}

impl AuthOptions {
    pub fn new(application_id: &str, application_secret: &str) -> Self {
        Self {
            application_id: application_id.to_string(),
            application_secret: application_secret.to_string(),
        }
    }

    /// True when neither credential is set.
    pub fn is_empty(&self) -> bool {
        self.application_id.is_empty() && self.application_secret.is_empty()
    }
}

impl Query for AuthOptions {}

impl fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthOptions")
            .field("application_id", &self.application_id)
            .field(
                "application_secret",
                &if self.application_secret.is_empty() {
                    ""
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}
