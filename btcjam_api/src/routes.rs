//! Named API routes: a fixed mapping from route name to path and method.

use std::collections::HashMap;

use reqwest::Method;

use crate::Error;

/// Route name for the listing enumeration endpoint.
pub const LISTINGS_ROUTE: &str = "Listings";

/// Route name for the authenticated user's profile endpoint.
pub const PROFILE_ROUTE: &str = "Profile";

/// A single API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    /// Absolute path pattern, e.g. `/listings`.
    pub path: &'static str,
    pub method: Method,
}

/// Read-only table of the API routes, keyed by name.
///
/// Built once and owned by the [`Client`](crate::Client); nothing is
/// registered after construction.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<&'static str, Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Creates the table with every route the API exposes.
    pub fn new() -> Self {
        let routes = [
            Route {
                name: LISTINGS_ROUTE,
                path: "/listings",
                method: Method::GET,
            },
            Route {
                name: PROFILE_ROUTE,
                path: "/me",
                method: Method::GET,
            },
        ];
        Self {
            routes: routes.into_iter().map(|r| (r.name, r)).collect(),
        }
    }

    /// Looks up a route by name.
    pub fn lookup(&self, name: &str) -> Result<&Route, Error> {
        self.routes
            .get(name)
            .ok_or_else(|| Error::UnknownRoute(name.to_string()))
    }

    /// Finds the route serving `method` on `path`. A single trailing slash on
    /// `path` is ignored.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<&Route> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        self.routes
            .values()
            .find(|r| r.path == path && r.method == *method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_registered_routes() {
        let table = RouteTable::new();

        let listings = table.lookup(LISTINGS_ROUTE).unwrap();
        assert_eq!(listings.path, "/listings");
        assert_eq!(listings.method, Method::GET);

        let profile = table.lookup(PROFILE_ROUTE).unwrap();
        assert_eq!(profile.path, "/me");
        assert_eq!(profile.method, Method::GET);
    }

    #[test]
    fn lookup_unknown_route_fails() {
        let err = RouteTable::new().lookup("Loans").unwrap_err();
        assert!(matches!(err, Error::UnknownRoute(ref name) if name == "Loans"));
        assert_eq!(err.to_string(), "no API route named \"Loans\"");
    }

    #[test]
    fn resolve_matches_path_and_method() {
        let table = RouteTable::new();
        let cases = [("/listings", LISTINGS_ROUTE), ("/me", PROFILE_ROUTE)];
        for (path, want) in cases {
            let route = table.resolve(&Method::GET, path).unwrap();
            assert_eq!(route.name, want, "{path}");
        }
    }

    #[test]
    fn resolve_tolerates_trailing_slash() {
        let table = RouteTable::new();
        let route = table.resolve(&Method::GET, "/listings/").unwrap();
        assert_eq!(route.name, LISTINGS_ROUTE);
    }

    #[test]
    fn resolve_rejects_wrong_method_or_path() {
        let table = RouteTable::new();
        assert!(table.resolve(&Method::POST, "/listings").is_none());
        assert!(table.resolve(&Method::GET, "/loans").is_none());
        assert!(table.resolve(&Method::GET, "/").is_none());
    }

    #[test]
    fn every_route_round_trips_through_lookup() {
        let table = RouteTable::new();
        assert_eq!(table.iter().count(), 2);
        for route in table.iter() {
            assert_eq!(table.lookup(route.name).unwrap(), route);
        }
    }
}
