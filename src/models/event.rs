// Event record.
// A crossover storyline spanning multiple series.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

use super::common::{self, Summary};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(default, deserialize_with = "common::urls")]
    pub urls: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "common::modified")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "common::date")]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::date")]
    pub end: Option<NaiveDate>,
    #[serde(default, deserialize_with = "common::image")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "common::items")]
    pub creators: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub characters: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub stories: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub comics: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub series: Vec<Summary>,
    #[serde(default)]
    pub next: Option<Summary>,
    #[serde(default)]
    pub previous: Option<Summary>,
}
