//! Executor errors
//!
//! Only infrastructure failures travel this path. Validation failures,
//! risk-limit breaches and not-found/already-terminal conditions are
//! structured values inside the operation outcomes so callers can render
//! every reason.

use thiserror::Error;

use helios_ports::StoreError;

#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Repository failure, surfaced unchanged - the engine performs no
    /// retries
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
