//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SnapshotStorage` - Durable load/save of the full choice mapping
//! - `OptionPicker` - Uniform random source for resolving choices

mod option_picker;
mod snapshot_storage;

pub use option_picker::OptionPicker;
pub use snapshot_storage::{ChoiceMap, SnapshotStorage, StorageError};
