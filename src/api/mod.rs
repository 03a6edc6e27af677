// Marvel API module.
// Provides the client, request signing, cache keys, and endpoint types.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod key;
pub mod transport;
pub mod types;

pub use auth::Credentials;
pub use client::{CatalogClient, MARVEL_API_BASE};
pub use key::CacheKey;
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use types::{Endpoint, Params, Resource};
