//! Helios Ports
//!
//! Port definitions (traits) for the Helios execution engine.
//! These define the boundaries between the engine and its collaborators:
//! the order and position repositories, and the time source.

mod clock;
mod error;
mod orders;
mod positions;

pub use clock::Clock;
pub use error::{StoreError, StoreResult};
pub use orders::{OrderRepository, OrderStatusCounts};
pub use positions::PositionRepository;
