// Character record.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{self, Summary};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "common::modified")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(default, deserialize_with = "common::urls")]
    pub urls: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "common::image")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "common::items")]
    pub comics: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub stories: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub events: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub series: Vec<Summary>,
}
