// Shared record pieces and field decoders.
// Normalizes the API's nested shapes (item lists, images, URL lists, dates) into flat fields.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Timestamp layout used by `modified` fields, e.g. `2013-03-20T11:54:44-0400`.
const MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Reference to another catalog record, as embedded in relation lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Summary {
    /// Id of the referenced record, taken from the last path segment of its URI.
    pub fn id(&self) -> Option<u64> {
        self.resource_uri.rsplit('/').next()?.parse().ok()
    }
}

/// Descriptive text attached to a comic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Key dates for a comic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dates {
    pub on_sale: Option<NaiveDate>,
    pub foc: Option<NaiveDate>,
    pub unlimited: Option<NaiveDate>,
    pub digital_purchase: Option<NaiveDate>,
}

/// Cover prices for a comic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prices {
    pub print: Option<Decimal>,
    pub digital_purchase: Option<Decimal>,
}

#[derive(Deserialize)]
struct ItemList<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct Image {
    path: String,
    extension: String,
}

impl Image {
    fn url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}

#[derive(Deserialize)]
struct TypedUrl {
    #[serde(rename = "type")]
    kind: String,
    url: String,
}

#[derive(Deserialize)]
struct TypedDate {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Deserialize)]
struct TypedPrice {
    #[serde(rename = "type")]
    kind: String,
    price: Decimal,
}

/// `{"available": n, "items": [...]}` -> the item list.
pub(crate) fn items<'de, D>(deserializer: D) -> Result<Vec<Summary>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Option<ItemList<Summary>> = Option::deserialize(deserializer)?;
    Ok(list.map(|list| list.items).unwrap_or_default())
}

/// `{"path": p, "extension": e}` -> `"p.e"`.
pub(crate) fn image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let image: Option<Image> = Option::deserialize(deserializer)?;
    Ok(image.map(|image| image.url()))
}

/// A list of images -> their URLs.
pub(crate) fn images<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let images: Option<Vec<Image>> = Option::deserialize(deserializer)?;
    Ok(images
        .unwrap_or_default()
        .iter()
        .map(Image::url)
        .collect())
}

/// `[{"type": t, "url": u}, ...]` -> map of type to URL.
pub(crate) fn urls<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls: Option<Vec<TypedUrl>> = Option::deserialize(deserializer)?;
    Ok(urls
        .unwrap_or_default()
        .into_iter()
        .map(|url| (url.kind, url.url))
        .collect())
}

/// Modified timestamp. The API sends `-0001-11-30T00:00:00-0500` for unknown
/// values; anything starting with `-` decodes as absent.
pub(crate) fn modified<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if is_unknown_date(s) => Ok(None),
        Some(s) => DateTime::parse_from_str(s, MODIFIED_FORMAT)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid modified date {:?}: {}", s, e))),
    }
}

/// Date from a value such as `2008-04-01 00:00:00` or `2013-03-20T00:00:00-0400`.
pub(crate) fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date_prefix))
}

/// `[{"type": "onsaleDate", "date": ...}, ...]` -> [`Dates`].
pub(crate) fn dates<'de, D>(deserializer: D) -> Result<Dates, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<TypedDate>> = Option::deserialize(deserializer)?;
    let mut dates = Dates::default();
    for entry in entries.unwrap_or_default() {
        let value = entry.date.as_deref().and_then(parse_date_prefix);
        match entry.kind.as_str() {
            "onsaleDate" => dates.on_sale = value,
            "focDate" => dates.foc = value,
            "unlimitedDate" => dates.unlimited = value,
            "digitalPurchaseDate" => dates.digital_purchase = value,
            _ => {}
        }
    }
    Ok(dates)
}

/// `[{"type": "printPrice", "price": 3.99}, ...]` -> [`Prices`].
pub(crate) fn prices<'de, D>(deserializer: D) -> Result<Prices, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<TypedPrice>> = Option::deserialize(deserializer)?;
    let mut prices = Prices::default();
    for entry in entries.unwrap_or_default() {
        match entry.kind.as_str() {
            "printPrice" => prices.print = Some(entry.price),
            "digitalPurchasePrice" => prices.digital_purchase = Some(entry.price),
            _ => {}
        }
    }
    Ok(prices)
}

/// Codes the API sometimes sends as numbers (isbn, diamondCode) -> strings.
pub(crate) fn code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or number, got {}", other))),
    }
}

/// The API marks missing dates with a negative year (`-0001-11-30...`).
fn is_unknown_date(raw: &str) -> bool {
    raw.starts_with('-')
}

fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if is_unknown_date(raw) {
        return None;
    }
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
