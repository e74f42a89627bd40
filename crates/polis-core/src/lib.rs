// Client core for the Polis university backend
//
// Key design decisions:
// - One generic ListController backs every entity list screen: a single
//   state machine parameterized by entity type and gateway instead of one
//   hand-written controller per entity
// - Gateways are constructor-injected (EntityGateway trait), never ambient
//   singletons
// - State is published as snapshots over a watch channel; only the owning
//   controller writes it
// - A generation counter makes superseded and post-invalidate responses inert
// - Search debouncing is the input side's job (Debouncer), not the
//   controller's

pub mod controller;
pub mod debounce;
pub mod error;
pub mod memory;
pub mod traits;

pub use controller::{ListController, ListState, DEFAULT_PAGE_SIZE};
pub use debounce::{Debouncer, DEFAULT_QUIESCENCE};
pub use error::{Error, Result};
pub use memory::InMemoryGateway;
pub use traits::{Entity, EntityGateway};
