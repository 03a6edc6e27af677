// Request building blocks for the Marvel API.
// Defines resources, endpoint paths, and query parameter sets.

use std::collections::BTreeMap;
use std::fmt;

/// Top-level catalog resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Comics,
    Series,
    Creators,
    Characters,
    Stories,
    Events,
}

impl Resource {
    /// Path segment used for this resource.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Comics => "comics",
            Resource::Series => "series",
            Resource::Creators => "creators",
            Resource::Characters => "characters",
            Resource::Stories => "stories",
            Resource::Events => "events",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Ordered path segments identifying a remote resource, e.g. `comics/45762/characters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    /// Endpoint for a whole collection (`comics`).
    pub fn collection(resource: Resource) -> Self {
        Self {
            segments: vec![resource.path().to_string()],
        }
    }

    /// Endpoint for a single item (`comics/45762`).
    pub fn item(resource: Resource, id: u64) -> Self {
        Self {
            segments: vec![resource.path().to_string(), id.to_string()],
        }
    }

    /// Endpoint for records related to an item (`comics/45762/characters`).
    pub fn relation(resource: Resource, id: u64, related: Resource) -> Self {
        Self {
            segments: vec![
                resource.path().to_string(),
                id.to_string(),
                related.path().to_string(),
            ],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Query parameters for a request.
///
/// Entries are kept sorted by name, so two sets holding the same pairs
/// always iterate and encode identically no matter the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a parameter, returning the previous value if one was replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(name.into(), value.to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL-encode the parameters as `a=1&b=2`, sorted by name.
    ///
    /// Spaces become `+`; `~` stays literal and `*` is escaped, so keys match
    /// the usual query-string quoting of the API's other clients.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
            .replace('*', "%2A")
            .replace("%7E", "~")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
