// Comic record.
// A single issue, collection, or trade paperback in the catalog.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{self, Dates, Prices, Summary, TextObject};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: u64,
    #[serde(default)]
    pub digital_id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issue_number: Option<f64>,
    #[serde(default)]
    pub variant_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "common::modified")]
    pub modified: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "common::code")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "common::code")]
    pub upc: Option<String>,
    #[serde(default, deserialize_with = "common::code")]
    pub diamond_code: Option<String>,
    #[serde(default, deserialize_with = "common::code")]
    pub ean: Option<String>,
    #[serde(default, deserialize_with = "common::code")]
    pub issn: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub text_objects: Vec<TextObject>,
    #[serde(rename = "resourceURI", default)]
    pub resource_uri: Option<String>,
    #[serde(default, deserialize_with = "common::urls")]
    pub urls: BTreeMap<String, String>,
    #[serde(default)]
    pub series: Option<Summary>,
    #[serde(default)]
    pub variants: Vec<Summary>,
    #[serde(default)]
    pub collections: Vec<Summary>,
    #[serde(default)]
    pub collected_issues: Vec<Summary>,
    #[serde(default, deserialize_with = "common::dates")]
    pub dates: Dates,
    #[serde(default, deserialize_with = "common::prices")]
    pub prices: Prices,
    #[serde(default, deserialize_with = "common::image")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "common::images")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "common::items")]
    pub creators: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub characters: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub stories: Vec<Summary>,
    #[serde(default, deserialize_with = "common::items")]
    pub events: Vec<Summary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn amazing_fantasy() -> serde_json::Value {
        json!({
            "id": 16926,
            "digitalId": 0,
            "title": "Amazing Fantasy (1962) #15",
            "issueNumber": 15,
            "variantDescription": "",
            "description": null,
            "modified": "-0001-11-30T00:00:00-0500",
            "isbn": 785110283,
            "upc": "759606201991000111",
            "diamondCode": 0,
            "ean": "",
            "issn": "",
            "format": "Comic",
            "pageCount": 36,
            "textObjects": [],
            "resourceURI": "http://gateway.marvel.com/v1/public/comics/16926",
            "urls": [{"type": "detail", "url": "http://marvel.com/comics/issue/16926"}],
            "series": {
                "resourceURI": "http://gateway.marvel.com/v1/public/series/2987",
                "name": "Amazing Fantasy (1962)"
            },
            "variants": [],
            "collections": [],
            "collectedIssues": [],
            "dates": [
                {"type": "onsaleDate", "date": "1962-08-10T00:00:00-0400"},
                {"type": "focDate", "date": "-0001-11-30T00:00:00-0500"}
            ],
            "prices": [{"type": "printPrice", "price": 9.99}],
            "thumbnail": {"path": "http://i.annihil.us/u/prod/marvel/i/mg/5/a0/58dd03dc2ec00", "extension": "jpg"},
            "images": [{"path": "http://i.annihil.us/u/prod/marvel/i/mg/5/a0/58dd03dc2ec00", "extension": "jpg"}],
            "creators": {
                "available": 1,
                "items": [{
                    "resourceURI": "http://gateway.marvel.com/v1/public/creators/32",
                    "name": "Steve Ditko",
                    "role": "penciller"
                }]
            },
            "characters": {
                "available": 1,
                "items": [{
                    "resourceURI": "http://gateway.marvel.com/v1/public/characters/1009610",
                    "name": "Spider-Man (Peter Parker)"
                }]
            },
            "stories": {"available": 0, "items": []},
            "events": {"available": 0, "items": []}
        })
    }

    #[test]
    fn test_decode_full_comic() {
        let comic: Comic = serde_json::from_value(amazing_fantasy()).unwrap();

        assert_eq!(comic.id, 16926);
        assert_eq!(comic.title.as_deref(), Some("Amazing Fantasy (1962) #15"));
        assert_eq!(comic.issue_number, Some(15.0));
        assert!(comic.description.is_none());
        assert!(comic.modified.is_none());
        assert_eq!(comic.isbn.as_deref(), Some("785110283"));
        assert_eq!(comic.diamond_code.as_deref(), Some("0"));
        assert_eq!(comic.upc.as_deref(), Some("759606201991000111"));
        assert_eq!(comic.format.as_deref(), Some("Comic"));
        assert_eq!(comic.series.as_ref().and_then(Summary::id), Some(2987));
        assert_eq!(comic.dates.on_sale, NaiveDate::from_ymd_opt(1962, 8, 10));
        assert!(comic.dates.foc.is_none());
        assert_eq!(comic.prices.print, Some(Decimal::new(999, 2)));
        assert!(comic.prices.digital_purchase.is_none());
        assert_eq!(
            comic.thumbnail.as_deref(),
            Some("http://i.annihil.us/u/prod/marvel/i/mg/5/a0/58dd03dc2ec00.jpg")
        );
        assert_eq!(comic.images.len(), 1);

        let characters: Vec<_> = comic.characters.iter().filter_map(|c| c.name.as_deref()).collect();
        assert!(characters.contains(&"Spider-Man (Peter Parker)"));
        assert_eq!(comic.creators[0].role.as_deref(), Some("penciller"));
        assert!(comic.stories.is_empty());
    }

    #[test]
    fn test_decode_minimal_comic() {
        let comic: Comic = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(comic.id, 1);
        assert!(comic.title.is_none());
        assert!(comic.characters.is_empty());
        assert_eq!(comic.dates, Dates::default());
    }

    #[test]
    fn test_missing_id_is_error() {
        assert!(serde_json::from_value::<Comic>(json!({"title": "No id"})).is_err());
    }
}
