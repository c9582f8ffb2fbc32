use std::time::Duration;

use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config;
use crate::content::models::{Assets, MenuItem, PageContent, Review, SpecialOffer, TimelineEntry, Video};

/// The seven resources the home page is assembled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Menu,
    ChefsChoice,
    Reviews,
    Timeline,
    Video,
    Assets,
    Special,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Menu,
        Resource::ChefsChoice,
        Resource::Reviews,
        Resource::Timeline,
        Resource::Video,
        Resource::Assets,
        Resource::Special,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Resource::Menu => "/menu",
            Resource::ChefsChoice => "/chefs-choice",
            Resource::Reviews => "/reviews",
            Resource::Timeline => "/timeline",
            Resource::Video => "/video",
            Resource::Assets => "/assets",
            Resource::Special => "/special",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("content service answered with status {0}")]
    Status(u16),
    #[error("malformed content: {0}")]
    Decode(String),
    #[error("no answer within {0} ms")]
    Timeout(u128),
}

/// Where page content comes from. One call per resource, answered with the raw JSON body.
pub trait ContentSource {
    fn fetch(&self, resource: Resource) -> LocalBoxFuture<'_, Result<Value, ContentError>>;
}

/// Sleeps on behalf of the loader so every fetch can be bounded.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}

pub struct HttpContentSource {
    api_root: String,
}

impl HttpContentSource {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self { api_root: api_root.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::api_url(""))
    }
}

impl ContentSource for HttpContentSource {
    fn fetch(&self, resource: Resource) -> LocalBoxFuture<'_, Result<Value, ContentError>> {
        let url = format!("{}{}", self.api_root, resource.path());
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ContentError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ContentError::Status(response.status()));
            }
            response
                .json::<Value>()
                .await
                .map_err(|e| ContentError::Decode(e.to_string()))
        }
        .boxed_local()
    }
}

/// Fetches all seven resources concurrently, each bounded by
/// `CONTENT_FETCH_TIMEOUT` on the browser clock.
pub async fn load_page_content<S>(source: &S) -> PageContent
where
    S: ContentSource + ?Sized,
{
    load_page_content_within(source, &BrowserTimer, config::CONTENT_FETCH_TIMEOUT).await
}

/// Never fails: every resource that errors or outlives `timeout` degrades to an
/// empty collection or `None` without holding back the others.
pub async fn load_page_content_within<S, T>(source: &S, timer: &T, timeout: Duration) -> PageContent
where
    S: ContentSource + ?Sized,
    T: Timer + ?Sized,
{
    let deadline = Deadline { timer, timeout };
    let (menu, chefs_choice, reviews, mut timeline, video, assets, special) = futures::join!(
        load_collection::<MenuItem, _, _>(source, &deadline, Resource::Menu),
        load_collection::<MenuItem, _, _>(source, &deadline, Resource::ChefsChoice),
        load_collection::<Review, _, _>(source, &deadline, Resource::Reviews),
        load_collection::<TimelineEntry, _, _>(source, &deadline, Resource::Timeline),
        load_singleton::<Video, _, _>(source, &deadline, Resource::Video),
        load_singleton::<Assets, _, _>(source, &deadline, Resource::Assets),
        load_singleton::<SpecialOffer, _, _>(source, &deadline, Resource::Special),
    );

    timeline.sort_by_key(|entry| entry.year);

    info!(
        "Content loaded: {} menu, {} chef's choice, {} reviews, {} timeline, special {}",
        menu.len(),
        chefs_choice.len(),
        reviews.len(),
        timeline.len(),
        if special.is_some() { "available" } else { "absent" }
    );

    PageContent {
        menu,
        chefs_choice,
        reviews,
        timeline,
        video,
        assets,
        special,
    }
}

struct Deadline<'a, T: ?Sized> {
    timer: &'a T,
    timeout: Duration,
}

impl<T: Timer + ?Sized> Deadline<'_, T> {
    async fn fetch<S>(&self, source: &S, resource: Resource) -> Result<Value, ContentError>
    where
        S: ContentSource + ?Sized,
    {
        match future::select(source.fetch(resource), self.timer.sleep(self.timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ContentError::Timeout(self.timeout.as_millis())),
        }
    }
}

async fn load_collection<T, S, D>(source: &S, deadline: &Deadline<'_, D>, resource: Resource) -> Vec<T>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
    D: Timer + ?Sized,
{
    match deadline.fetch(source, resource).await {
        Ok(body) => collection_from(resource, body),
        Err(e) => {
            warn!("Failed to fetch {}: {}", resource.path(), e);
            Vec::new()
        }
    }
}

async fn load_singleton<T, S, D>(source: &S, deadline: &Deadline<'_, D>, resource: Resource) -> Option<T>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
    D: Timer + ?Sized,
{
    let result = deadline
        .fetch(source, resource)
        .await
        .and_then(singleton_from::<T>);

    match result {
        Ok(value) => value,
        // No special today is routine, the service answers 404.
        Err(e) if resource == Resource::Special => {
            info!("No special offer available: {}", e);
            None
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", resource.path(), e);
            None
        }
    }
}

fn collection_from<T: DeserializeOwned>(resource: Resource, body: Value) -> Vec<T> {
    let items = match body {
        Value::Object(mut map) => map.remove("items"),
        _ => None,
    };

    let items = match items {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Vec::new(),
        Some(other) => {
            warn!("Expected an items array from {}, got {}", resource.path(), other);
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping item {} from {}: {}", index, resource.path(), e);
                None
            }
        })
        .collect()
}

fn singleton_from<T: DeserializeOwned>(body: Value) -> Result<Option<T>, ContentError> {
    if body.is_null() {
        return Ok(None);
    }
    serde_json::from_value(body)
        .map(Some)
        .map_err(|e| ContentError::Decode(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::test_support::{load, StalledSpecial, TickTimer, Yield, TEST_TIMEOUT};
    use super::*;
    use crate::content::mock::MockContentSource;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;
    use std::collections::{HashMap, HashSet};

    /// Serves fixed bodies; resources without a body fail like a timeout.
    #[derive(Default)]
    struct StubSource {
        bodies: HashMap<Resource, Value>,
    }

    impl StubSource {
        fn with(mut self, resource: Resource, body: Value) -> Self {
            self.bodies.insert(resource, body);
            self
        }
    }

    impl ContentSource for StubSource {
        fn fetch(&self, resource: Resource) -> LocalBoxFuture<'_, Result<Value, ContentError>> {
            let result = self
                .bodies
                .get(&resource)
                .cloned()
                .ok_or_else(|| ContentError::Network("timed out".into()));
            async move { result }.boxed_local()
        }
    }

    /// Mock content, except for the resources listed as failing.
    struct FlakySource {
        inner: MockContentSource,
        failing: HashSet<Resource>,
    }

    impl ContentSource for FlakySource {
        fn fetch(&self, resource: Resource) -> LocalBoxFuture<'_, Result<Value, ContentError>> {
            if self.failing.contains(&resource) {
                async { Err::<Value, _>(ContentError::Status(503)) }.boxed_local()
            } else {
                self.inner.fetch(resource)
            }
        }
    }

    /// Records how many fetches had started by the time each one finished.
    struct StartCounter {
        started: Cell<usize>,
        started_at_first_finish: Cell<Option<usize>>,
    }

    impl ContentSource for StartCounter {
        fn fetch(&self, _resource: Resource) -> LocalBoxFuture<'_, Result<Value, ContentError>> {
            async move {
                self.started.set(self.started.get() + 1);
                Yield(1).await;
                if self.started_at_first_finish.get().is_none() {
                    self.started_at_first_finish.set(Some(self.started.get()));
                }
                Err::<Value, _>(ContentError::Network("counted".into()))
            }
            .boxed_local()
        }
    }

    fn menu_body() -> Value {
        json!({
            "items": [
                {"id": "m1", "name": "Margherita", "price": 299, "category": "classic", "img": "a.jpg", "desc": "Basil."},
                {"id": "m2", "name": "Lemonade", "price": 99.0, "category": "drinks", "img": "b.jpg", "desc": "Zesty."}
            ]
        })
    }

    #[test]
    fn test_empty_reviews_with_valid_menu() {
        let source = StubSource::default()
            .with(Resource::Menu, menu_body())
            .with(Resource::Reviews, json!({"items": []}));

        let content = load(&source);
        assert_eq!(content.menu.len(), 2);
        assert!(content.reviews.is_empty());
        assert!(content.chefs_choice.is_empty());
        assert!(content.special.is_none());
    }

    #[test]
    fn test_all_sources_failing_yields_default() {
        let content = load(&StubSource::default());
        assert_eq!(content, PageContent::default());
    }

    #[test]
    fn test_missing_items_key_is_empty_collection() {
        let source = StubSource::default()
            .with(Resource::Menu, json!({}))
            .with(Resource::Reviews, json!({"items": null}))
            .with(Resource::Timeline, json!({"items": "nope"}));

        let content = load(&source);
        assert!(content.menu.is_empty());
        assert!(content.reviews.is_empty());
        assert!(content.timeline.is_empty());
    }

    #[test]
    fn test_invalid_items_are_dropped_individually() {
        let source = StubSource::default().with(
            Resource::Reviews,
            json!({
                "items": [
                    {"id": "r1", "name": "Ananya", "rating": 5, "text": "Great", "avatar": ""},
                    {"id": "r2", "name": "Broken", "rating": 9, "text": "??", "avatar": ""},
                    {"id": "r3", "name": "Sana", "rating": 4, "text": "Good", "avatar": ""}
                ]
            }),
        );

        let content = load(&source);
        let ids: Vec<_> = content.reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_timeline_sorted_by_year() {
        let source = StubSource::default().with(
            Resource::Timeline,
            json!({
                "items": [
                    {"year": 2021, "title": "Hub", "text": "", "img": "c.jpg"},
                    {"year": 2015, "title": "First Oven", "text": "", "img": "a.jpg"},
                    {"year": 2018, "title": "Pop-up", "text": "", "img": "b.jpg"}
                ]
            }),
        );

        let content = load(&source);
        let years: Vec<_> = content.timeline.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2015, 2018, 2021]);
    }

    #[test]
    fn test_singletons_parse_or_become_absent() {
        let source = StubSource::default()
            .with(Resource::Video, json!({"url": "https://youtube.com/embed/x"}))
            .with(Resource::Assets, json!({"wrong": true}))
            .with(Resource::Special, Value::Null);

        let content = load(&source);
        assert_eq!(content.video.unwrap().caption, None);
        assert!(content.assets.is_none());
        assert!(content.special.is_none());
    }

    #[test]
    fn test_special_failure_does_not_affect_batch() {
        let failing = HashSet::from([Resource::Special]);
        let source = FlakySource { inner: MockContentSource, failing };

        let content = load(&source);
        assert!(content.special.is_none());
        assert!(!content.menu.is_empty());
        assert!(content.video.is_some());
    }

    #[test]
    fn test_failures_never_cross_sections() {
        let full = load(&MockContentSource);

        for mask in 0u32..(1 << Resource::ALL.len()) {
            let failing: HashSet<Resource> = Resource::ALL
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, resource)| *resource)
                .collect();
            let fails = |resource| failing.contains(&resource);
            let source = FlakySource { inner: MockContentSource, failing: failing.clone() };
            let content = load(&source);

            assert_eq!(content.menu.is_empty(), fails(Resource::Menu), "mask {:07b}", mask);
            assert_eq!(content.chefs_choice.is_empty(), fails(Resource::ChefsChoice), "mask {:07b}", mask);
            assert_eq!(content.reviews.is_empty(), fails(Resource::Reviews), "mask {:07b}", mask);
            assert_eq!(content.timeline.is_empty(), fails(Resource::Timeline), "mask {:07b}", mask);
            assert_eq!(content.video.is_none(), fails(Resource::Video), "mask {:07b}", mask);
            assert_eq!(content.assets.is_none(), fails(Resource::Assets), "mask {:07b}", mask);
            assert_eq!(content.special.is_none(), fails(Resource::Special), "mask {:07b}", mask);

            if !fails(Resource::Menu) {
                assert_eq!(content.menu, full.menu);
            }
        }
    }

    #[test]
    fn test_stalled_special_times_out_without_holding_back_the_page() {
        let content = load(&StalledSpecial);
        assert!(content.special.is_none());
        assert_eq!(content.menu, load(&MockContentSource).menu);
        assert!(!content.reviews.is_empty());
        assert!(content.video.is_some());
    }

    #[test]
    fn test_stalled_fetch_reports_timeout() {
        let deadline = Deadline { timer: &TickTimer(4), timeout: TEST_TIMEOUT };
        let result = block_on(deadline.fetch(&StalledSpecial, Resource::Special));
        assert_eq!(result, Err(ContentError::Timeout(50)));

        let answered = block_on(deadline.fetch(&StalledSpecial, Resource::Menu));
        assert!(answered.is_ok());
    }

    #[test]
    fn test_fetches_run_concurrently() {
        let counter = StartCounter {
            started: Cell::new(0),
            started_at_first_finish: Cell::new(None),
        };

        load(&counter);
        assert_eq!(counter.started.get(), 7);
        assert_eq!(counter.started_at_first_finish.get(), Some(7));
    }

    #[test]
    fn test_resource_paths() {
        let paths: Vec<_> = Resource::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            vec!["/menu", "/chefs-choice", "/reviews", "/timeline", "/video", "/assets", "/special"]
        );
    }
}
