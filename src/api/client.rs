// Marvel API client.
// Runs the request pipeline: cache lookup, signing, transport, classification, cache fill.

use chrono::Local;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::cache::ResponseCache;
use crate::error::{CatalogError, Result};

use super::auth::Credentials;
use super::envelope;
use super::key::CacheKey;
use super::transport::{HttpTransport, Transport};
use super::types::{Endpoint, Params, Resource};

pub const MARVEL_API_BASE: &str = "http://gateway.marvel.com:80/v1/public/";

/// Marvel API client with optional response caching.
pub struct CatalogClient {
    credentials: Credentials,
    cache: Option<Box<dyn ResponseCache>>,
    transport: Box<dyn Transport>,
    base_url: String,
}

impl CatalogClient {
    /// Create a client that talks to the live API over HTTP.
    pub fn new(
        public_key: &str,
        private_key: &str,
        cache: Option<Box<dyn ResponseCache>>,
    ) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(
            Credentials::new(public_key, private_key),
            cache,
            transport,
        ))
    }

    /// Create a client from the MARVEL_PUBLIC_KEY and MARVEL_PRIVATE_KEY environment variables.
    pub fn from_env(cache: Option<Box<dyn ResponseCache>>) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Ok(Self::with_transport(credentials, cache, HttpTransport::new()?))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(
        credentials: Credentials,
        cache: Option<Box<dyn ResponseCache>>,
        transport: impl Transport + 'static,
    ) -> Self {
        Self {
            credentials,
            cache,
            transport: Box::new(transport),
            base_url: MARVEL_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root. Must end with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn cache(&self) -> Option<&dyn ResponseCache> {
        self.cache.as_deref()
    }

    /// Full request URL for an endpoint.
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Fetch the `results` payload for an endpoint, consulting the cache first.
    ///
    /// Only successful 200 responses are written back to the cache; error
    /// envelopes fail before the write is reached.
    pub fn call(&self, endpoint: &Endpoint, params: &Params) -> Result<Value> {
        let url = self.url_for(endpoint);
        let key = CacheKey::build(&url, params);

        if let Some(cached) = self.cached(&key)? {
            debug!(%key, "Cache hit");
            return envelope::results(cached);
        }
        trace!(%key, "Cache miss");

        let signed = self.credentials.signed_params(params, Local::now().naive_local());
        debug!(%url, "Requesting");
        let response = self.transport.get(&url, &signed)?;

        let body: Value = serde_json::from_str(&response.body)?;
        let payload = envelope::classify(body).inspect_err(|e| {
            warn!(%url, status = response.status, error = %e, "API returned an error");
        })?;

        if response.status == 200 {
            self.save(&key, &payload)?;
        } else {
            debug!(%url, status = response.status, "Not caching non-200 response");
        }

        envelope::results(payload)
    }

    /// Fetch a single record by id.
    pub(crate) fn fetch_one<T: DeserializeOwned>(&self, resource: Resource, id: u64) -> Result<T> {
        let results = self.call(&Endpoint::item(resource, id), &Params::new())?;

        let first = match results {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            Value::Array(_) => {
                return Err(CatalogError::Api(format!(
                    "no {} found with id {}",
                    resource, id
                )));
            }
            _ => {
                return Err(CatalogError::Api(
                    "`results` is not a list".to_string(),
                ));
            }
        };

        serde_json::from_value(first).map_err(CatalogError::Validation)
    }

    /// Fetch a list of records. Any record that fails to decode fails the whole call.
    pub(crate) fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: Option<&Params>,
    ) -> Result<Vec<T>> {
        let empty = Params::new();
        let results = self.call(&endpoint, params.unwrap_or(&empty))?;
        serde_json::from_value(results).map_err(CatalogError::Validation)
    }

    fn cached(&self, key: &CacheKey) -> Result<Option<Value>> {
        match &self.cache {
            Some(cache) => Ok(cache.get(key.as_str())?.filter(|value| !value.is_null())),
            None => Ok(None),
        }
    }

    fn save(&self, key: &CacheKey, payload: &Value) -> Result<()> {
        if let Some(cache) = &self.cache {
            cache.store(key.as_str(), payload)?;
            trace!(%key, "Stored response");
        }
        Ok(())
    }
}
