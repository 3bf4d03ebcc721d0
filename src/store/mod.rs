//! Per-resource list stores
//!
//! Each admin resource keeps a transient cache of its most recent
//! successful fetch: the items, a loading flag, the last error message
//! and pagination metadata when the upstream endpoint paginates.
//!
//! Concurrent fetches for the same list are fenced with a monotonic
//! sequence number: `begin_fetch` issues a token and `finish_fetch`
//! installs a result only while its token is still current, so a
//! slow response can never overwrite the result of a later request.
//! Mutations splice by entity id; the last fulfilled mutation wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::client::ClientResult;
use crate::errors::ClientError;
use crate::models::{
    Category, Coupon, Course, CurrentAffairs, CurrentAffairsCategory, DailyQuiz, EBook,
    Identified, Language, LiveClass, Order, PageInfo, SubCategory, TestSeries, Validity,
};

/// Cached list state for one resource
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Option<PageInfo>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            pagination: None,
        }
    }
}

/// Token tying a fetch result back to the request that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    name: &'static str,
    state: Arc<RwLock<ListState<T>>>,
    fetch_seq: Arc<AtomicU64>,
}

impl<T: Clone + Identified> ResourceStore<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Arc::new(RwLock::new(ListState::default())),
            fetch_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn snapshot(&self) -> ListState<T> {
        self.state.read().await.clone()
    }

    /// Mark the store loading and issue a fencing token for this fetch
    pub async fn begin_fetch(&self) -> FetchToken {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().await;
        state.loading = true;
        FetchToken(seq)
    }

    /// Install a fetch result if its token is still current.
    ///
    /// Returns whether the result was installed. A stale result (a
    /// newer fetch began since) is dropped without touching the cache.
    pub async fn finish_fetch(
        &self,
        token: FetchToken,
        result: Result<(Vec<T>, Option<PageInfo>), String>,
    ) -> bool {
        if self.fetch_seq.load(Ordering::SeqCst) != token.0 {
            debug!(resource = self.name, "discarding stale fetch result");
            return false;
        }

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok((items, pagination)) => {
                state.items = items;
                state.pagination = pagination;
                state.error = None;
            }
            Err(message) => {
                state.error = Some(message);
            }
        }
        true
    }

    /// Run a fetch future with fencing applied, returning the snapshot
    /// after installation. The error (if any) is both recorded in the
    /// state and propagated.
    pub async fn refresh<Fut>(&self, fetch: Fut) -> Result<ListState<T>, ClientError>
    where
        Fut: std::future::Future<Output = ClientResult<(Vec<T>, Option<PageInfo>)>>,
    {
        let token = self.begin_fetch().await;
        match fetch.await {
            Ok(payload) => {
                self.finish_fetch(token, Ok(payload)).await;
                Ok(self.snapshot().await)
            }
            Err(error) => {
                let message = error.display_message("fetch", self.name);
                self.finish_fetch(token, Err(message)).await;
                Err(error)
            }
        }
    }

    /// `refresh` for whole-collection endpoints that carry no
    /// pagination metadata
    pub async fn refresh_all<Fut>(&self, fetch: Fut) -> Result<ListState<T>, ClientError>
    where
        Fut: std::future::Future<Output = ClientResult<Vec<T>>>,
    {
        self.refresh(async move { fetch.await.map(|items| (items, None)) })
            .await
    }

    /// Splice a created or updated entity into the cached list by id
    pub async fn upsert(&self, item: T) {
        let mut state = self.state.write().await;
        match state
            .items
            .iter()
            .position(|existing| existing.entity_id() == item.entity_id())
        {
            Some(index) => state.items[index] = item,
            None => state.items.insert(0, item),
        }
    }

    pub async fn remove(&self, id: &str) {
        let mut state = self.state.write().await;
        state.items.retain(|existing| existing.entity_id() != id);
    }
}

/// One store per admin resource, shared across handlers
#[derive(Debug, Clone)]
pub struct Stores {
    pub categories: ResourceStore<Category>,
    pub sub_categories: ResourceStore<SubCategory>,
    pub languages: ResourceStore<Language>,
    pub validities: ResourceStore<Validity>,
    pub courses: ResourceStore<Course>,
    pub coupons: ResourceStore<Coupon>,
    pub orders: ResourceStore<Order>,
    pub current_affairs: ResourceStore<CurrentAffairs>,
    pub current_affairs_categories: ResourceStore<CurrentAffairsCategory>,
    pub daily_quizzes: ResourceStore<DailyQuiz>,
    pub ebooks: ResourceStore<EBook>,
    pub live_classes: ResourceStore<LiveClass>,
    pub test_series: ResourceStore<TestSeries>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            categories: ResourceStore::new("categories"),
            sub_categories: ResourceStore::new("subcategories"),
            languages: ResourceStore::new("languages"),
            validities: ResourceStore::new("validities"),
            courses: ResourceStore::new("courses"),
            coupons: ResourceStore::new("coupons"),
            orders: ResourceStore::new("orders"),
            current_affairs: ResourceStore::new("current affairs"),
            current_affairs_categories: ResourceStore::new("current affairs categories"),
            daily_quizzes: ResourceStore::new("daily quizzes"),
            ebooks: ResourceStore::new("ebooks"),
            live_classes: ResourceStore::new("live classes"),
            test_series: ResourceStore::new("test series"),
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(id: &str, name: &str) -> Language {
        Language {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn stale_fetch_result_is_discarded() {
        let store: ResourceStore<Language> = ResourceStore::new("languages");

        let first = store.begin_fetch().await;
        let second = store.begin_fetch().await;

        // The later request resolves first
        let installed = store
            .finish_fetch(second, Ok((vec![language("l2", "Hindi")], None)))
            .await;
        assert!(installed);

        // The earlier request resolves last and must be dropped
        let installed = store
            .finish_fetch(first, Ok((vec![language("l1", "English")], None)))
            .await;
        assert!(!installed);

        let state = store.snapshot().await;
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "l2");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn failed_fetch_records_error_and_keeps_items() {
        let store: ResourceStore<Language> = ResourceStore::new("languages");

        let token = store.begin_fetch().await;
        store
            .finish_fetch(token, Ok((vec![language("l1", "English")], None)))
            .await;

        let token = store.begin_fetch().await;
        store
            .finish_fetch(token, Err("Failed to fetch languages".to_string()))
            .await;

        let state = store.snapshot().await;
        assert_eq!(state.error.as_deref(), Some("Failed to fetch languages"));
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn upsert_splices_by_id() {
        let store: ResourceStore<Language> = ResourceStore::new("languages");
        let token = store.begin_fetch().await;
        store
            .finish_fetch(
                token,
                Ok((vec![language("l1", "English"), language("l2", "Hindi")], None)),
            )
            .await;

        store.upsert(language("l2", "हिन्दी")).await;
        store.upsert(language("l3", "Tamil")).await;

        let state = store.snapshot().await;
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[0].id, "l3");
        assert_eq!(
            state
                .items
                .iter()
                .find(|l| l.id == "l2")
                .map(|l| l.name.as_str()),
            Some("हिन्दी")
        );
    }

    #[tokio::test]
    async fn remove_drops_matching_entity() {
        let store: ResourceStore<Language> = ResourceStore::new("languages");
        let token = store.begin_fetch().await;
        store
            .finish_fetch(token, Ok((vec![language("l1", "English")], None)))
            .await;

        store.remove("l1").await;
        assert!(store.snapshot().await.items.is_empty());
    }
}
