// Typed client for the Marvel comics catalog API.
// Builds signed requests, caches responses, and decodes them into catalog records.

pub mod api;
pub mod cache;
pub mod error;
pub mod models;

pub use api::{CatalogClient, Credentials, Endpoint, Params, Resource};
pub use cache::{FileCache, MemoryCache, ResponseCache};
pub use error::{CatalogError, Result};
pub use models::{Character, Comic, Creator, Event, Series, Story};
