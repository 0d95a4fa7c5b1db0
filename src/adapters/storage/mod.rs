//! Storage Adapters
//!
//! Implementations of the SnapshotStorage port for persisting choices.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStorage** - Stores the mapping as one JSON or YAML file
//! - **InMemorySnapshotStorage** - Stores the mapping in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSnapshotStorage, InMemorySnapshotStorage};
//!
//! // Production: file-based storage
//! let storage = FileSnapshotStorage::new("./data/choices.json", StorageFormat::Json);
//!
//! // Testing: in-memory storage
//! let storage = InMemorySnapshotStorage::new();
//! ```

mod file_snapshot_storage;
mod in_memory_snapshot_storage;
mod record;

pub use file_snapshot_storage::FileSnapshotStorage;
pub use in_memory_snapshot_storage::InMemorySnapshotStorage;
