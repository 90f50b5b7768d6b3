//! Lazy GitHub star badges.
//!
//! [`StarsLoader`] fills every badge carrying a repository identifier with
//! that repository's star count. Counts already in the session cache are
//! rendered synchronously; the rest are fetched by a small pool of workers
//! sharing one cursor over the pending list.
//!
//! Per repository the loader moves through [`RepoState`]:
//!
//! ```text
//! Unresolved ──► CacheHit
//!     │
//!     └────────► Fetching ──► Resolved
//!                     └─────► Failed
//! ```
//!
//! A failed repository is not cached, so the next page load retries it.
//!
//! Loaders that share an [`InFlight`] registry never request the same
//! repository at the same time: a loader that finds a request already
//! running waits for it and then reads the result from the shared cache.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::join_all;

use crate::config::StarsConfig;
use crate::config::stars::FAILED_LABEL;
use crate::core::error::FetchError;
use crate::models::{StarCache, StoredValue, star_label};
use crate::utils::log;
use crate::utils::storage::{self, KeyValueStore};

/// An element that displays one repository's star count.
pub trait RepoBadge {
    /// `owner/name`, or `None` when the element carries no identifier.
    fn repo(&self) -> Option<String>;

    /// Current text content.
    fn text(&self) -> String;

    fn set_text(&self, text: &str);
}

/// Source of star counts.
#[allow(async_fn_in_trait)]
pub trait StarFetcher {
    /// Star count for `owner/name`.
    async fn stargazers(&self, repo: &str) -> Result<u64, FetchError>;
}

impl<T: StarFetcher + ?Sized> StarFetcher for Rc<T> {
    async fn stargazers(&self, repo: &str) -> Result<u64, FetchError> {
        (**self).stargazers(repo).await
    }
}

/// Resolution state of a repository identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepoState {
    /// No cache entry and no request yet.
    #[default]
    Unresolved,
    /// Served from the session cache without a request.
    CacheHit,
    /// A request is in flight.
    Fetching,
    /// Count fetched, cached and rendered.
    Resolved,
    /// Request failed; nothing cached.
    Failed,
}

/// Repositories with a request in flight, shared by the loaders of a session.
#[derive(Debug, Default)]
pub struct InFlight {
    waiters: RefCell<HashMap<String, Vec<oneshot::Sender<()>>>>,
}

/// Outcome of [`InFlight::claim`].
enum Claim {
    /// The caller issues the request and must [`InFlight::release`] it.
    Owner,
    /// Another loader holds the request; resolves once it is released.
    Waiting(oneshot::Receiver<()>),
}

impl InFlight {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn contains(&self, repo: &str) -> bool {
        self.waiters.borrow().contains_key(repo)
    }

    fn claim(&self, repo: &str) -> Claim {
        let mut waiters = self.waiters.borrow_mut();
        match waiters.get_mut(repo) {
            Some(queue) => {
                let (tx, rx) = oneshot::channel();
                queue.push(tx);
                Claim::Waiting(rx)
            }
            None => {
                waiters.insert(repo.to_string(), Vec::new());
                Claim::Owner
            }
        }
    }

    /// Drop the claim on `repo` and wake every loader waiting on it.
    fn release(&self, repo: &str) {
        let waiting = self.waiters.borrow_mut().remove(repo).unwrap_or_default();
        for tx in waiting {
            let _ = tx.send(());
        }
    }
}

/// Counters for one [`StarsLoader::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Distinct uncached repositories found when the run started.
    pub queued: usize,
    /// Repositories resolved by another loader in the same session, either
    /// already cached at dispatch time or fetched while this one waited.
    pub served_from_cache: usize,
    /// Requests issued.
    pub fetched: usize,
    pub resolved: usize,
    pub failed: usize,
}

/// Fills star badges from the session cache and the network.
pub struct StarsLoader<S, F, B> {
    store: S,
    fetcher: F,
    badges: Vec<B>,
    config: StarsConfig,
    cache: RefCell<StarCache>,
    states: RefCell<HashMap<String, RepoState>>,
    in_flight: Rc<InFlight>,
}

impl<S, F, B> StarsLoader<S, F, B>
where
    S: KeyValueStore,
    F: StarFetcher,
    B: RepoBadge,
{
    /// Create a loader and read the cache from `store`.
    ///
    /// A missing or unparsable cache counts as empty.
    pub fn new(store: S, fetcher: F, badges: Vec<B>, config: StarsConfig) -> Self {
        let cache = load_cache(&store, &config.cache_key);
        Self {
            store,
            fetcher,
            badges,
            config,
            cache: RefCell::new(cache),
            states: RefCell::new(HashMap::new()),
            in_flight: InFlight::new(),
        }
    }

    /// Share an in-flight registry with other loaders on the same store.
    pub fn with_in_flight(self, in_flight: Rc<InFlight>) -> Self {
        Self { in_flight, ..self }
    }

    /// Snapshot of the in-memory cache.
    pub fn cache(&self) -> StarCache {
        self.cache.borrow().clone()
    }

    pub fn state(&self, repo: &str) -> RepoState {
        self.states.borrow().get(repo).copied().unwrap_or_default()
    }

    /// Render every cached count. No network access.
    ///
    /// Returns the number of badges updated.
    pub fn render_cached(&self) -> usize {
        let cache = self.cache.borrow();
        let mut rendered = 0;

        for badge in &self.badges {
            if let Some(repo) = badge.repo()
                && let Some(stars) = cache.get(&repo)
            {
                badge.set_text(&star_label(stars));
                self.set_state(&repo, RepoState::CacheHit);
                rendered += 1;
            }
        }

        rendered
    }

    /// Distinct identifiers without a cache entry, in document order.
    pub fn pending_repos(&self) -> Vec<String> {
        let cache = self.cache.borrow();
        let mut seen = HashSet::new();

        self.badges
            .iter()
            .filter_map(RepoBadge::repo)
            .filter(|repo| !cache.contains(repo))
            .filter(|repo| seen.insert(repo.clone()))
            .collect()
    }

    /// Fetch every uncached count and render the results.
    ///
    /// Runs `config.concurrency` workers over a shared cursor and returns
    /// once the pending list is exhausted. Failures are rendered, never
    /// retried.
    pub async fn run(&self) -> LoadSummary {
        self.refresh_from_store();
        self.render_cached();

        let queue = self.pending_repos();
        let summary = RefCell::new(LoadSummary {
            queued: queue.len(),
            ..LoadSummary::default()
        });
        if queue.is_empty() {
            return summary.into_inner();
        }

        let cursor = Cell::new(0);
        let workers = self.config.concurrency.max(1);
        join_all((0..workers).map(|_| self.worker(&queue, &cursor, &summary))).await;

        let summary = summary.into_inner();
        log::debug(&format!(
            "stars: {} queued, {} fetched, {} resolved, {} failed",
            summary.queued, summary.fetched, summary.resolved, summary.failed
        ));
        summary
    }

    async fn worker(
        &self,
        queue: &[String],
        cursor: &Cell<usize>,
        summary: &RefCell<LoadSummary>,
    ) {
        while let Some(repo) = next_repo(queue, cursor) {
            // Another loader in this session may have cached it meanwhile.
            if self.serve_cached(repo) {
                summary.borrow_mut().served_from_cache += 1;
                continue;
            }

            self.set_state(repo, RepoState::Fetching);

            if let Claim::Waiting(done) = self.in_flight.claim(repo) {
                // Cancellation of the other request reads as a failure too.
                let _ = done.await;
                if self.serve_cached(repo) {
                    summary.borrow_mut().served_from_cache += 1;
                } else {
                    self.fail(repo);
                    summary.borrow_mut().failed += 1;
                }
                continue;
            }

            summary.borrow_mut().fetched += 1;
            let result = self.fetcher.stargazers(repo).await;
            match result {
                Ok(stars) => {
                    self.resolve(repo, stars);
                    summary.borrow_mut().resolved += 1;
                }
                Err(e) => {
                    log::warn(&format!("stars: {repo}: {e}"));
                    self.fail(repo);
                    summary.borrow_mut().failed += 1;
                }
            }
            self.in_flight.release(repo);
        }
    }

    /// Render `repo` from the cache, refreshed from the store first.
    fn serve_cached(&self, repo: &str) -> bool {
        self.refresh_from_store();
        let cached = self.cache.borrow().get(repo);
        let Some(stars) = cached else {
            return false;
        };
        self.render_repo(repo, &star_label(stars));
        self.set_state(repo, RepoState::CacheHit);
        true
    }

    fn resolve(&self, repo: &str, stars: u64) {
        self.refresh_from_store();
        {
            let mut cache = self.cache.borrow_mut();
            cache.insert(repo, stars);
            if let Err(e) = storage::write_json(&self.store, &self.config.cache_key, &*cache) {
                log::debug(&format!("stars: cache not persisted: {e}"));
            }
        }
        self.render_repo(repo, &star_label(stars));
        self.set_state(repo, RepoState::Resolved);
    }

    /// Show the failure label on empty badges only; a count rendered earlier
    /// stays in place.
    fn fail(&self, repo: &str) {
        for badge in self.badges_for(repo) {
            if badge.text().trim().is_empty() {
                badge.set_text(FAILED_LABEL);
            }
        }
        self.set_state(repo, RepoState::Failed);
    }

    fn render_repo(&self, repo: &str, text: &str) {
        for badge in self.badges_for(repo) {
            badge.set_text(text);
        }
    }

    fn badges_for<'a>(&'a self, repo: &'a str) -> impl Iterator<Item = &'a B> + 'a {
        self.badges
            .iter()
            .filter(move |badge| badge.repo().as_deref() == Some(repo))
    }

    /// Pull in entries other loaders persisted since we last looked.
    fn refresh_from_store(&self) {
        let stored = load_cache(&self.store, &self.config.cache_key);
        self.cache.borrow_mut().merge_missing(stored);
    }

    fn set_state(&self, repo: &str, state: RepoState) {
        self.states.borrow_mut().insert(repo.to_string(), state);
    }
}

fn next_repo<'a>(queue: &'a [String], cursor: &Cell<usize>) -> Option<&'a str> {
    let index = cursor.get();
    let repo = queue.get(index)?;
    cursor.set(index + 1);
    Some(repo)
}

fn load_cache(store: &impl KeyValueStore, key: &str) -> StarCache {
    match storage::read_json::<StarCache>(store, key) {
        StoredValue::Corrupt(reason) => {
            log::debug(&format!("stars: ignoring corrupt cache: {reason}"));
            StarCache::new()
        }
        other => other.or_default(),
    }
}
