// Marvel API endpoint methods.
// Declares one typed accessor per (resource, relation) pair on top of the generic fetchers.

use crate::error::Result;
use crate::models::{Character, Comic, Creator, Event, Series, Story};

use super::client::CatalogClient;
use super::types::{Endpoint, Params, Resource};

/// Generates, per resource: a single-record getter, a collection lister,
/// and one lister per related resource.
macro_rules! catalog_endpoints {
    ($(
        $resource:ident => $record:ty {
            get: $get:ident,
            list: $list:ident,
            relations: { $($relation:ident => $related:ident: $related_record:ty),* $(,)? }
        }
    )*) => {
        impl CatalogClient {
            $(
                #[doc = concat!("Fetch one record from `", stringify!($resource), "` by id.")]
                pub fn $get(&self, id: u64) -> Result<$record> {
                    self.fetch_one(Resource::$resource, id)
                }

                #[doc = concat!("List records from `", stringify!($resource), "`.")]
                pub fn $list(&self, params: Option<&Params>) -> Result<Vec<$record>> {
                    self.fetch_list(Endpoint::collection(Resource::$resource), params)
                }

                $(
                    #[doc = concat!(
                        "List `", stringify!($related), "` related to a record in `",
                        stringify!($resource), "`."
                    )]
                    pub fn $relation(&self, id: u64, params: Option<&Params>) -> Result<Vec<$related_record>> {
                        self.fetch_list(Endpoint::relation(Resource::$resource, id, Resource::$related), params)
                    }
                )*
            )*
        }
    };
}

catalog_endpoints! {
    Comics => Comic {
        get: comic,
        list: comics_list,
        relations: {
            comic_characters => Characters: Character,
            comic_creators => Creators: Creator,
            comic_events => Events: Event,
            comic_stories => Stories: Story,
        }
    }
    Series => Series {
        get: series,
        list: series_list,
        relations: {
            series_characters => Characters: Character,
            series_comics => Comics: Comic,
            series_creators => Creators: Creator,
            series_events => Events: Event,
            series_stories => Stories: Story,
        }
    }
    Creators => Creator {
        get: creator,
        list: creators_list,
        relations: {
            creator_comics => Comics: Comic,
            creator_events => Events: Event,
            creator_series => Series: Series,
            creator_stories => Stories: Story,
        }
    }
    Characters => Character {
        get: character,
        list: characters_list,
        relations: {
            character_comics => Comics: Comic,
            character_events => Events: Event,
            character_series => Series: Series,
            character_stories => Stories: Story,
        }
    }
    Stories => Story {
        get: story,
        list: stories_list,
        relations: {
            story_characters => Characters: Character,
            story_comics => Comics: Comic,
            story_creators => Creators: Creator,
            story_events => Events: Event,
            story_series => Series: Series,
        }
    }
    Events => Event {
        get: event,
        list: events_list,
        relations: {
            event_characters => Characters: Character,
            event_comics => Comics: Comic,
            event_creators => Creators: Creator,
            event_series => Series: Series,
            event_stories => Stories: Story,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::Credentials;
    use crate::api::transport::{Transport, TransportResponse};
    use crate::cache::{MemoryCache, ResponseCache};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    type Requests = Rc<RefCell<Vec<(String, Params)>>>;

    /// Transport that records each request and returns one record with id 42.
    struct EchoTransport {
        requests: Requests,
    }

    impl Transport for EchoTransport {
        fn get(&self, url: &str, params: &Params) -> Result<TransportResponse> {
            self.requests
                .borrow_mut()
                .push((url.to_string(), params.clone()));
            Ok(TransportResponse {
                status: 200,
                body: json!({"data": {"results": [{"id": 42}]}}).to_string(),
            })
        }
    }

    fn client_with_cache(cache: Option<Box<dyn ResponseCache>>) -> (CatalogClient, Requests) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let transport = EchoTransport {
            requests: Rc::clone(&requests),
        };
        let client = CatalogClient::with_transport(Credentials::new("pub", "priv"), cache, transport)
            .with_base_url("http://api/");
        (client, requests)
    }

    fn client() -> (CatalogClient, Requests) {
        client_with_cache(None)
    }

    fn urls(requests: &Requests) -> Vec<String> {
        requests.borrow().iter().map(|(url, _)| url.clone()).collect()
    }

    #[test]
    fn test_single_record_paths() {
        let (client, requests) = client();

        assert_eq!(client.comic(1).unwrap().id, 42);
        assert_eq!(client.series(2).unwrap().id, 42);
        assert_eq!(client.creator(3).unwrap().id, 42);
        assert_eq!(client.character(4).unwrap().id, 42);
        assert_eq!(client.story(5).unwrap().id, 42);
        assert_eq!(client.event(6).unwrap().id, 42);

        assert_eq!(
            urls(&requests),
            vec![
                "http://api/comics/1",
                "http://api/series/2",
                "http://api/creators/3",
                "http://api/characters/4",
                "http://api/stories/5",
                "http://api/events/6",
            ]
        );
    }

    #[test]
    fn test_collection_paths() {
        let (client, requests) = client();

        assert_eq!(client.comics_list(None).unwrap().len(), 1);
        client.series_list(None).unwrap();
        client.creators_list(None).unwrap();
        client.characters_list(None).unwrap();
        client.stories_list(None).unwrap();
        client.events_list(None).unwrap();

        assert_eq!(
            urls(&requests),
            vec![
                "http://api/comics",
                "http://api/series",
                "http://api/creators",
                "http://api/characters",
                "http://api/stories",
                "http://api/events",
            ]
        );
    }

    #[test]
    fn test_relation_paths() {
        let (client, requests) = client();

        let characters = client.comic_characters(45762, None).unwrap();
        assert_eq!(characters[0].id, 42);
        client.series_creators(466, None).unwrap();
        client.creator_stories(11463, None).unwrap();
        client.character_series(1009610, None).unwrap();
        client.story_comics(7, None).unwrap();
        client.event_series(269, None).unwrap();

        assert_eq!(
            urls(&requests),
            vec![
                "http://api/comics/45762/characters",
                "http://api/series/466/creators",
                "http://api/creators/11463/stories",
                "http://api/characters/1009610/series",
                "http://api/stories/7/comics",
                "http://api/events/269/series",
            ]
        );
    }

    #[test]
    fn test_relation_params_are_sent() {
        let (client, requests) = client();
        let params = Params::new().with("orderBy", "-modified");

        let comics = client.creator_comics(11463, Some(&params)).unwrap();
        assert_eq!(comics.len(), 1);

        let requests = requests.borrow();
        let (url, sent) = &requests[0];
        assert_eq!(url, "http://api/creators/11463/comics");
        assert_eq!(sent.get("orderBy"), Some("-modified"));
        assert_eq!(sent.get("apikey"), Some("pub"));
        assert!(sent.contains("hash"));
        assert!(sent.contains("ts"));
        assert_eq!(sent.len(), 4);
    }

    #[test]
    fn test_list_params_are_sent() {
        let (client, requests) = client();
        let params = Params::new()
            .with("dateDescriptor", "thisWeek")
            .with("noVariants", true);

        client.comics_list(Some(&params)).unwrap();

        let requests = requests.borrow();
        let (url, sent) = &requests[0];
        assert_eq!(url, "http://api/comics");
        assert_eq!(sent.get("dateDescriptor"), Some("thisWeek"));
        assert_eq!(sent.get("noVariants"), Some("true"));
    }

    #[test]
    fn test_relation_params_form_cache_key() {
        let cache = Arc::new(MemoryCache::new());
        let (client, requests) = client_with_cache(Some(Box::new(Arc::clone(&cache))));
        let params = Params::new().with("orderBy", "-modified");

        client.creator_comics(11463, Some(&params)).unwrap();

        let stored = cache
            .get("http://api/creators/11463/comics?orderBy=-modified")
            .unwrap();
        assert_eq!(stored, Some(json!({"results": [{"id": 42}]})));
        assert_eq!(cache.get("http://api/creators/11463/comics").unwrap(), None);

        let again = client.creator_comics(11463, Some(&params)).unwrap();
        assert_eq!(again[0].id, 42);
        assert_eq!(requests.borrow().len(), 1);
    }

    #[test]
    fn test_cached_relation_entry_is_served() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .store(
                "http://api/creators/11463/comics?orderBy=-modified",
                &json!({"results": [{"id": 45762}]}),
            )
            .unwrap();
        let (client, requests) = client_with_cache(Some(Box::new(Arc::clone(&cache))));

        let params = Params::new().with("orderBy", "-modified");
        let comics = client.creator_comics(11463, Some(&params)).unwrap();

        assert_eq!(comics[0].id, 45762);
        assert!(requests.borrow().is_empty());
    }
}
