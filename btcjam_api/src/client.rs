//! HTTP client for the BTCJam REST API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{AuthOptions, Query},
    routes::RouteTable,
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://btcjam.com/api/v1/";

/// Request timeout applied to the default transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("btcjam_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the BTCJam API.
///
/// Holds only immutable configuration: the base URL, optional application
/// credentials, the route table and a `reqwest::Client`. Every request is a
/// single round trip with no retries.
#[derive(Debug, Clone)]
pub struct Client {
    /// Always ends with `/` so route paths resolve beneath it.
    base_url: Url,
    auth: Option<AuthOptions>,
    routes: RouteTable,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production API, without credentials.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            auth: None,
            routes: RouteTable::new(),
            http,
        })
    }

    /// Replaces the underlying transport.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the route table.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Sets the application id and secret sent with authenticated requests.
    pub fn set_authentication(&mut self, application_id: &str, application_secret: &str) {
        self.auth = Some(AuthOptions::new(application_id, application_secret));
    }

    pub fn with_authentication(mut self, application_id: &str, application_secret: &str) -> Self {
        self.set_authentication(application_id, application_secret);
        self
    }

    pub fn authentication(&self) -> Option<&AuthOptions> {
        self.auth.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Builds the absolute URL for a named route, plus its HTTP method.
    ///
    /// The route path loses its leading `/` so it resolves relative to the
    /// base URL rather than replacing the base path.
    pub fn build_url<Q: Query>(
        &self,
        route_name: &str,
        query: Option<&Q>,
    ) -> Result<(Method, Url), Error> {
        let route = self.routes.lookup(route_name)?;
        let relative = route.path.strip_prefix('/').unwrap_or(route.path);
        let url = self
            .base_url
            .join(relative)
            .map_err(|source| Error::InvalidUrl {
                url: relative.to_string(),
                source,
            })?;
        let url = match query {
            Some(query) => query.add_to_url(&url)?,
            None => url,
        };
        Ok((route.method.clone(), url))
    }

    /// Sends one request over the transport.
    pub async fn execute(&self, method: Method, url: Url) -> Result<reqwest::Response, Error> {
        tracing::debug!("{} {}", method, redact_secret(&url));
        self.http
            .request(method.clone(), url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|source| {
                tracing::error!("Failed to send {} request: {}", method, source);
                Error::Transport {
                    method,
                    url: redact_secret(&url),
                    source,
                }
            })
    }

    pub(crate) async fn get<T, Q>(&self, route_name: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let (method, url) = self.build_url(route_name, query)?;
        let resp = self.execute(method.clone(), url.clone()).await?;
        let url = redact_secret(&url);

        let status = resp.status().as_u16();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(source) => {
                // A non-2xx status is reported even when the body is unreadable.
                check_status(&method, &url, status, "")?;
                tracing::error!("Failed to read response body: {}", source);
                return Err(Error::Transport { method, url, source });
            }
        };

        check_status(&method, &url, status, &body)?;
        decode(&method, &url, &body)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url).map_err(|source| Error::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Rejects any status outside 200..=299.
fn check_status(method: &Method, url: &Url, status: u16, body: &str) -> Result<(), Error> {
    if (200..=299).contains(&status) {
        return Ok(());
    }
    let snippet = truncate_body(body);
    tracing::error!("{} {} failed with status {}: {}", method, url, status, snippet);
    Err(Error::HttpStatus {
        method: method.clone(),
        url: url.clone(),
        status,
        body: snippet,
    })
}

fn decode<T: DeserializeOwned>(method: &Method, url: &Url, body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|source| {
        tracing::error!(
            "Failed to parse response: {} | body: {}",
            source,
            truncate_body(body)
        );
        Error::Decode {
            method: method.clone(),
            url: url.clone(),
            source,
        }
    })
}

/// Masks the `secret` query parameter so URLs can be logged and returned in
/// errors.
fn redact_secret(url: &Url) -> Url {
    if !url.query_pairs().any(|(k, _)| k == "secret") {
        return url.clone();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "secret" {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut url = url.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{LISTINGS_ROUTE, PROFILE_ROUTE};
    use crate::types::Listing;

    fn client() -> Client {
        Client::with_base_url("https://btcjam.com/api/v1/").unwrap()
    }

    #[test]
    fn default_client_targets_production() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert!(client.authentication().is_none());
    }

    #[test]
    fn build_url_resolves_under_base_path() {
        let (method, url) = client()
            .build_url::<AuthOptions>(LISTINGS_ROUTE, None)
            .unwrap();
        assert_eq!(method, Method::GET);
        assert_eq!(url.as_str(), "https://btcjam.com/api/v1/listings");

        let (_, url) = client().build_url::<AuthOptions>(PROFILE_ROUTE, None).unwrap();
        assert_eq!(url.as_str(), "https://btcjam.com/api/v1/me");
    }

    #[test]
    fn base_url_without_trailing_slash_is_normalized() {
        let client = Client::with_base_url("http://localhost:8080/api/v1").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/v1/");
        let (_, url) = client.build_url::<AuthOptions>(LISTINGS_ROUTE, None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/listings");
    }

    #[test]
    fn root_base_url() {
        let client = Client::with_base_url("http://127.0.0.1:4000").unwrap();
        let (_, url) = client.build_url::<AuthOptions>(PROFILE_ROUTE, None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4000/me");
    }

    #[test]
    fn invalid_base_url_fails() {
        let err = Client::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn build_url_unknown_route_fails() {
        let err = client()
            .build_url::<AuthOptions>("Loans", None)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRoute(_)));
    }

    #[test]
    fn build_url_adds_credentials_only_when_set() {
        let client = client();
        let (_, url) = client
            .build_url(LISTINGS_ROUTE, client.authentication())
            .unwrap();
        assert_eq!(url.query(), None);

        let client = client.with_authentication("app", "secret");
        let (_, url) = client
            .build_url(LISTINGS_ROUTE, client.authentication())
            .unwrap();
        assert_eq!(url.query(), Some("appid=app&secret=secret"));

        let client = client.with_authentication("", "");
        let (_, url) = client
            .build_url(LISTINGS_ROUTE, client.authentication())
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn check_status_accepts_2xx_only() {
        let url = Url::parse("https://btcjam.com/api/v1/listings").unwrap();
        for status in [200, 201, 204, 299] {
            assert!(check_status(&Method::GET, &url, status, "").is_ok(), "{status}");
        }
        for status in [199, 300, 404, 500] {
            let err = check_status(&Method::GET, &url, status, "nope").unwrap_err();
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn check_status_error_reports_method_url_and_status() {
        let url = Url::parse("https://btcjam.com/api/v1/me").unwrap();
        let err = check_status(&Method::GET, &url, 500, "boom").unwrap_err();
        assert_eq!(err.to_string(), "GET https://btcjam.com/api/v1/me: 500");
        assert!(matches!(err, Error::HttpStatus { ref body, .. } if body == "boom"));
    }

    #[test]
    fn decode_error_reports_method_and_url() {
        let url = Url::parse("https://btcjam.com/api/v1/listings").unwrap();
        let err = decode::<Vec<Listing>>(&Method::GET, &url, "{not json").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("error reading response from GET https://btcjam.com/api/v1/listings"));
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn redact_secret_masks_only_secret() {
        let url = Url::parse("https://btcjam.com/api/v1/listings?appid=app&secret=hunter2").unwrap();
        let redacted = redact_secret(&url);
        assert_eq!(redacted.query(), Some("appid=app&secret=REDACTED"));

        let plain = Url::parse("https://btcjam.com/api/v1/me").unwrap();
        assert_eq!(redact_secret(&plain), plain);
    }

    #[test]
    fn truncate_body_limits_length() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
