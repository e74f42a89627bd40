// HTTP gateway for the Polis backend
//
// Implements the EntityGateway seam from polis-core over reqwest. Endpoints
// are JSON POSTs: {entity}/filter, {entity}/get, {entity}/upsert,
// {entity}/delete, plus the four association endpoints on ApiClient. The
// envelope decides success; HTTP status alone does not.

mod client;
mod gateway;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use gateway::HttpGateway;
