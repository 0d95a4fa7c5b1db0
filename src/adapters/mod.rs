//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API over the application handlers
//! - `random` - Option pickers backed by `rand`
//! - `storage` - Snapshot storage (JSON/YAML file, in-memory)

pub mod http;
pub mod random;
pub mod storage;
