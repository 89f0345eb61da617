//! Error types for the API client.

use reqwest::Method;
use url::Url;

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The route table has no entry with this name.
    #[error("no API route named {0:?}")]
    UnknownRoute(String),

    /// A base URL or route path could not be parsed into a URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Query options could not be encoded into a query string.
    #[error("failed to encode query options: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request never produced a response (connection, timeout, body read).
    #[error("{method} {url}: {source}")]
    Transport {
        method: Method,
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status outside 200..=299.
    #[error("{method} {url}: {status}")]
    HttpStatus {
        method: Method,
        url: Url,
        status: u16,
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("error reading response from {method} {url}: {source}")]
    Decode {
        method: Method,
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    /// A loosely typed numeric field held something that is not a number.
    #[error("could not convert value to a number: {raw}")]
    NumericCoercion { raw: String },
}

impl Error {
    /// Returns the HTTP status code for `HttpStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
