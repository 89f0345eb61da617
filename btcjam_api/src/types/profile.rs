use serde::{Deserialize, Serialize};

/// The authenticated user's own profile, from `/me`.
///
/// The API does not document any fields yet, so this decodes from any JSON
/// object and carries nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {}
