//! SQLite-backed record storage

pub mod collection;
pub mod db;
pub mod inventory;
pub mod serde_helpers;
pub mod suppliers;

pub use collection::{Assignments, Collection, Record};
pub use db::{Database, StoreError};
pub use inventory::{InventoryItem, InventoryPatch, NewInventoryItem};
pub use suppliers::{NewSupplier, Supplier, SupplierPatch};
