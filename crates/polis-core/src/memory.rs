// In-memory gateway for examples and testing
//
// Keeps entities in memory behind the same EntityGateway seam the HTTP
// gateway implements: seedable contents, case-insensitive substring
// filtering, stable id-ordered paging, upsert id assignment, and per-id
// delete embargoes to simulate DELETE_*_NOT_ALLOWED responses.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use polis_contracts::{EntityFilter, ErrorCode, Slice};
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::traits::{Entity, EntityGateway};

#[derive(Debug)]
struct Store<E> {
    items: Vec<E>,
    next_id: i64,
    embargoed: HashSet<i64>,
    fail_next: Option<Error>,
}

/// In-memory entity gateway
#[derive(Debug)]
pub struct InMemoryGateway<E> {
    store: Arc<RwLock<Store<E>>>,
}

impl<E> Clone for InMemoryGateway<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<E: Entity> InMemoryGateway<E> {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                items: Vec::new(),
                next_id: 1,
                embargoed: HashSet::new(),
                fail_next: None,
            })),
        }
    }

    /// Pre-populate the gateway; entities without ids get one assigned
    pub async fn seed(&self, entities: Vec<E>) {
        let mut store = self.store.write().await;
        for mut entity in entities {
            if entity.id().is_none() {
                entity.set_id(store.next_id);
            }
            if let Some(id) = entity.id() {
                store.next_id = store.next_id.max(id + 1);
            }
            store.items.push(entity);
        }
        store.items.sort_by_key(|entity| entity.id());
    }

    /// Make the next call fail with `error`, whatever the operation
    pub async fn fail_next(&self, error: Error) {
        self.store.write().await.fail_next = Some(error);
    }

    /// Refuse deletion of `id`, as the backend does for entities with
    /// dependent associations
    pub async fn embargo_delete(&self, id: i64) {
        self.store.write().await.embargoed.insert(id);
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.items.is_empty()
    }

    async fn take_fault(&self) -> Option<Error> {
        self.store.write().await.fail_next.take()
    }
}

impl<E: Entity> Default for InMemoryGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityGateway<E> for InMemoryGateway<E> {
    async fn filter(&self, filter: &EntityFilter) -> Result<Slice<E>> {
        if let Some(err) = self.take_fault().await {
            return Err(err);
        }
        let store = self.store.read().await;
        let needle = filter
            .filter
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let matched: Vec<&E> = store
            .items
            .iter()
            .filter(|entity| {
                needle.is_empty() || entity.search_text().to_lowercase().contains(&needle)
            })
            .collect();

        let total = matched.len();
        let page_size = filter.pagination.page_size as usize;
        let start = filter.pagination.page_number as usize * page_size;
        let end = (start + page_size).min(total);
        let content: Vec<E> = matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();
        Ok(Slice {
            content,
            has_next: end < total,
            pageable: filter.pagination,
        })
    }

    async fn get(&self, id: i64) -> Result<E> {
        if let Some(err) = self.take_fault().await {
            return Err(err);
        }
        self.store
            .read()
            .await
            .items
            .iter()
            .find(|entity| entity.id() == Some(id))
            .cloned()
            .ok_or_else(|| Error::api(E::NOT_FOUND, format!("{} {} not found", E::PATH, id)))
    }

    async fn upsert(&self, entity: &E) -> Result<E> {
        if let Some(err) = self.take_fault().await {
            return Err(err);
        }
        if !entity.has_required_fields() {
            return Err(Error::api(
                ErrorCode::ValidationError,
                format!("{} is missing required fields", E::PATH),
            ));
        }
        let mut store = self.store.write().await;
        let mut entity = entity.clone();
        match entity.id() {
            Some(id) => {
                let Some(slot) = store.items.iter_mut().find(|item| item.id() == Some(id)) else {
                    return Err(Error::api(
                        E::NOT_FOUND,
                        format!("{} {} not found", E::PATH, id),
                    ));
                };
                *slot = entity.clone();
            }
            None => {
                let id = store.next_id;
                store.next_id += 1;
                entity.set_id(id);
                store.items.push(entity.clone());
            }
        }
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if let Some(err) = self.take_fault().await {
            return Err(err);
        }
        let mut store = self.store.write().await;
        if store.embargoed.contains(&id) {
            return Err(Error::api(
                E::DELETE_NOT_ALLOWED,
                format!("{} {} has dependent associations", E::PATH, id),
            ));
        }
        let before = store.items.len();
        store.items.retain(|entity| entity.id() != Some(id));
        if store.items.len() == before {
            return Err(Error::api(
                E::NOT_FOUND,
                format!("{} {} not found", E::PATH, id),
            ));
        }
        Ok(())
    }
}
