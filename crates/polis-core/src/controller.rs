// Paginated, searchable, mutable list state
//
// One controller instance backs one list screen. The controller owns the
// state and publishes snapshots over a watch channel; nothing else writes it.
// A generation counter resolves the superseded-request race: every reset load
// bumps the generation, and a response only applies while its stamped
// generation is still current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use polis_contracts::{EntityFilter, Pagination};
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::traits::{Entity, EntityGateway};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Snapshot of one list screen's state
#[derive(Debug, Clone)]
pub struct ListState<E> {
    /// Accumulates across pages; replaced on reset
    pub items: Vec<E>,
    /// Next page to request
    pub current_page: u32,
    pub has_next: bool,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub search_text: String,
    /// Normalized user-facing message of the last failure
    pub error: Option<String>,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            has_next: true,
            is_loading: false,
            is_refreshing: false,
            search_text: String::new(),
            error: None,
        }
    }
}

impl<E> ListState<E> {
    /// A load-family request is in flight
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_refreshing
    }
}

struct Inner<E, G> {
    gateway: G,
    page_size: u32,
    generation: AtomicU64,
    state: Mutex<ListState<E>>,
    tx: watch::Sender<ListState<E>>,
}

/// Generic list controller, one instance per entity list screen
pub struct ListController<E: Entity, G: EntityGateway<E>> {
    inner: Arc<Inner<E, G>>,
}

impl<E: Entity, G: EntityGateway<E>> Clone for ListController<E, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity, G: EntityGateway<E>> ListController<E, G> {
    pub fn new(gateway: G) -> Self {
        Self::with_page_size(gateway, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(gateway: G, page_size: u32) -> Self {
        let state = ListState::default();
        let (tx, _) = watch::channel(state.clone());
        Self {
            inner: Arc::new(Inner {
                gateway,
                page_size,
                generation: AtomicU64::new(0),
                state: Mutex::new(state),
                tx,
            }),
        }
    }

    /// Receiver of state snapshots; updated on every mutation
    pub fn subscribe(&self) -> watch::Receiver<ListState<E>> {
        self.inner.tx.subscribe()
    }

    /// Current state snapshot
    pub fn state(&self) -> ListState<E> {
        self.lock().clone()
    }

    /// Load one page; `reset` discards items and restarts from page 0
    pub async fn load(&self, reset: bool) -> Result<()> {
        self.run_load(reset, false).await
    }

    /// Pagination continuation; no-op while busy or once the last page arrived
    pub async fn load_more(&self) -> Result<()> {
        self.run_load(false, false).await
    }

    /// Reset load that flies the refresh flag instead of the loading flag
    pub async fn refresh(&self) -> Result<()> {
        self.run_load(true, true).await
    }

    /// Store the new search text and reload from page 0
    ///
    /// Every call issues a request; debouncing raw input is the caller's job
    /// (see `debounce::Debouncer`).
    pub async fn search(&self, text: impl Into<String>) -> Result<()> {
        self.lock().search_text = text.into();
        self.run_load(true, false).await
    }

    /// Delete a persisted entity and drop it from `items`
    ///
    /// An entity without an id fails locally before any network call. On
    /// success the entity is removed by id, no implicit reload.
    pub async fn delete(&self, entity: &E) -> Result<()> {
        let Some(id) = entity.id() else {
            let mut state = self.lock();
            state.error = Some(Error::MissingId.user_message());
            self.publish(&state);
            return Err(Error::MissingId);
        };

        let generation = self.inner.generation.load(Ordering::SeqCst);
        let result = self.inner.gateway.delete(id).await;

        let mut state = self.lock();
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            trace!(entity = E::PATH, id, "dropping superseded delete response");
            return result;
        }
        match result {
            Ok(()) => {
                state.items.retain(|item| item.id() != Some(id));
                self.publish(&state);
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.user_message());
                self.publish(&state);
                Err(err)
            }
        }
    }

    /// Clear the surfaced error message
    pub fn clear_error(&self) {
        let mut state = self.lock();
        state.error = None;
        self.publish(&state);
    }

    /// Make every in-flight response inert and drop the busy flags
    ///
    /// Call when the owning screen goes away: late responses must not mutate
    /// state the screen no longer observes.
    pub fn invalidate(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();
        state.is_loading = false;
        state.is_refreshing = false;
        self.publish(&state);
    }

    async fn run_load(&self, reset: bool, refreshing: bool) -> Result<()> {
        let (generation, filter) = {
            let mut state = self.lock();
            if !reset && (state.is_busy() || !state.has_next) {
                trace!(entity = E::PATH, "load_more skipped");
                return Ok(());
            }
            // Resets always win: supersede whatever is in flight.
            let generation = if reset {
                self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
            } else {
                self.inner.generation.load(Ordering::SeqCst)
            };
            if reset {
                state.items.clear();
                state.current_page = 0;
                state.has_next = true;
            }
            if refreshing {
                state.is_refreshing = true;
            } else {
                state.is_loading = true;
            }
            let filter = EntityFilter {
                filter: Some(state.search_text.clone()).filter(|text| !text.is_empty()),
                pagination: Pagination::new(state.current_page, self.inner.page_size),
                sorting: None,
            };
            self.publish(&state);
            (generation, filter)
        };

        debug!(
            entity = E::PATH,
            page = filter.pagination.page_number,
            reset,
            "requesting page"
        );
        let result = self.inner.gateway.filter(&filter).await;

        let mut state = self.lock();
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            trace!(entity = E::PATH, "dropping superseded page response");
            return Ok(());
        }
        state.is_loading = false;
        state.is_refreshing = false;
        match result {
            Ok(slice) => {
                if reset {
                    state.items = slice.content;
                } else {
                    state.items.extend(slice.content);
                }
                state.has_next = slice.has_next;
                state.current_page += 1;
                state.error = None;
                self.publish(&state);
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.user_message());
                self.publish(&state);
                Err(err)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState<E>> {
        self.inner.state.lock().unwrap()
    }

    fn publish(&self, state: &ListState<E>) {
        self.inner.tx.send_replace(state.clone());
    }
}
