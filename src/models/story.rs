// Story record.
// The smallest indivisible reading unit, such as a cover or interior story.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{self, Summary};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "common::modified")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "common::image")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "common::items")]
    pub creators: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub characters: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub series: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub comics: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub events: Vec<Summary>,
    #[serde(default)]
    pub original_issue: Option<Summary>,
}
