//! Helios Store
//!
//! In-memory implementations of the repository ports, backed by
//! `DashMap` for thread-safe per-entry access. Suitable for simulation
//! and paper trading; a persistent backend would implement the same
//! ports.

mod orders;
mod positions;

pub use orders::InMemoryOrderRepository;
pub use positions::InMemoryPositionRepository;
