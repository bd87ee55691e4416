//! Placeholder URL normalization for example code.
//!
//! Documentation samples are written against well-known placeholder hosts
//! (local loopback variants and example domains). Before display, those are
//! rewritten to the endpoints configured in `doctabs.toml`, separately for
//! REST-style and GraphQL-style samples, plus a derived substitution for
//! storage/asset URLs.
//!
//! All functions are pure text filters: no state, no I/O, deterministic, and
//! idempotent once the placeholders are gone (a configured endpoint never
//! matches a placeholder pattern again). They compose with the tab-block
//! scanner as a code filter:
//!
//! ```
//! use doctabs_config::Endpoints;
//! use doctabs_urls::{SampleKind, normalize_code};
//!
//! let endpoints = Endpoints::default();
//! let code = "curl https://api.example.com/api/products";
//! assert_eq!(
//!     normalize_code(code, SampleKind::Rest, &endpoints),
//!     "curl http://localhost:8001/api/products"
//! );
//! ```

mod normalize;
mod substitute;

pub use normalize::{
    SampleKind, normalize_code, normalize_graphql_urls, normalize_rest_urls,
    normalize_storage_urls, strip_api_suffix,
};
pub use substitute::Substitutions;
