// Typed HTTP gateway per entity family
//
// One generic implementation covers students, teachers, and courses; the
// entity type supplies its path segment, so adding an entity means
// implementing the Entity trait, not writing another gateway.

use std::marker::PhantomData;

use async_trait::async_trait;
use polis_contracts::{AckResponse, EntityFilter, EntityId, SingleResponse, Slice, SliceResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

use polis_core::{Entity, EntityGateway, Error, Result};

use crate::client::ApiClient;

/// HTTP-backed gateway for one entity family
#[derive(Debug, Clone)]
pub struct HttpGateway<E> {
    client: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E> HttpGateway<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> EntityGateway<E> for HttpGateway<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    async fn filter(&self, filter: &EntityFilter) -> Result<Slice<E>> {
        let response: SliceResponse<E> = self
            .client
            .post(&format!("/{}/filter", E::PATH), filter)
            .await?;
        response.into_result().map_err(Error::from)
    }

    async fn get(&self, id: i64) -> Result<E> {
        let response: SingleResponse<E> = self
            .client
            .post(&format!("/{}/get", E::PATH), &EntityId { id })
            .await?;
        response.into_result().map_err(Error::from)
    }

    async fn upsert(&self, entity: &E) -> Result<E> {
        let response: SingleResponse<E> = self
            .client
            .post(&format!("/{}/upsert", E::PATH), entity)
            .await?;
        response.into_result().map_err(Error::from)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response: AckResponse = self
            .client
            .post(&format!("/{}/delete", E::PATH), &EntityId { id })
            .await?;
        response.into_ack().map_err(Error::from)
    }
}
