//! Placeholder tables and the normalization passes built from them.

use doctabs_config::Endpoints;

use crate::substitute::Substitutions;

/// Placeholder hosts used by REST samples.
const REST_PLACEHOLDERS: [&str; 4] = [
    "http://127.0.0.1:8001",
    "http://localhost:8001",
    "https://your-domain.com",
    "https://api.example.com",
];

/// Placeholder hosts used by GraphQL samples.
const GRAPHQL_PLACEHOLDERS: [&str; 4] = [
    "http://127.0.0.1:8000",
    "http://localhost:8000",
    "https://your-domain.com",
    "https://graphql.example.com",
];

/// Placeholder storage/asset URLs (served from the API's host).
const STORAGE_PLACEHOLDERS: [&str; 3] = [
    "http://127.0.0.1:8000/storage",
    "http://localhost:8000/storage",
    "https://your-domain.com/storage",
];

/// Which API a sample targets; selects the normalization passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// REST sample: REST hosts, then storage URLs against the REST base.
    Rest,
    /// GraphQL sample: GraphQL hosts, then storage URLs against the GraphQL
    /// base.
    GraphQl,
}

/// Replace REST placeholder hosts with the configured REST base.
#[must_use]
pub fn normalize_rest_urls(code: &str, endpoints: &Endpoints) -> String {
    replace_hosts(code, &REST_PLACEHOLDERS, &endpoints.rest_url)
}

/// Replace GraphQL placeholder hosts with the configured GraphQL base.
#[must_use]
pub fn normalize_graphql_urls(code: &str, endpoints: &Endpoints) -> String {
    replace_hosts(code, &GRAPHQL_PLACEHOLDERS, &endpoints.graphql_url)
}

/// Replace storage placeholder URLs with `{base}/storage`, where `base` is
/// `api_url` with its `/api...` path suffix stripped.
#[must_use]
pub fn normalize_storage_urls(code: &str, api_url: &str) -> String {
    let base = strip_api_suffix(api_url);
    let mut subs = Substitutions::new();
    for placeholder in STORAGE_PLACEHOLDERS {
        subs.add(placeholder, format!("{base}/storage"));
    }
    subs.apply(code)
}

/// Run all passes appropriate for one sample kind.
#[must_use]
pub fn normalize_code(code: &str, kind: SampleKind, endpoints: &Endpoints) -> String {
    match kind {
        SampleKind::Rest => {
            let code = normalize_rest_urls(code, endpoints);
            normalize_storage_urls(&code, &endpoints.rest_url)
        }
        SampleKind::GraphQl => {
            let code = normalize_graphql_urls(code, endpoints);
            normalize_storage_urls(&code, &endpoints.graphql_url)
        }
    }
}

/// Strip the `/api...` path suffix from an API base URL.
///
/// The search starts after the scheme separator, so a host such as
/// `api.example.com` keeps its authority intact and only the path is
/// stripped.
#[must_use]
pub fn strip_api_suffix(api_url: &str) -> &str {
    let path_start = api_url.find("://").map_or(0, |idx| idx + 3);
    match api_url[path_start..].find("/api") {
        Some(idx) => &api_url[..path_start + idx],
        None => api_url,
    }
}

fn replace_hosts(code: &str, placeholders: &[&str], target: &str) -> String {
    let mut subs = Substitutions::new();
    for placeholder in placeholders {
        subs.add(*placeholder, target);
    }
    subs.apply(code)
}
