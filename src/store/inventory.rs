//! Inventory items - stock on hand

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::collection::{Assignments, Record};
use super::serde_helpers::scalar_text;

/// Inventory row as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    /// Free-form, e.g. "100" or "40 bags"
    pub quantity: String,
}

/// New inventory item for insertion
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: String,
}

/// Inventory update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryPatch {
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    pub quantity: Option<String>,
}

impl Record for InventoryItem {
    const TABLE: &'static str = "inventory";
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        quantity TEXT NOT NULL
    )";

    type New = NewInventoryItem;
    type Patch = InventoryPatch;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            quantity: row.get("quantity")?,
        })
    }

    fn complete(patch: InventoryPatch) -> Option<NewInventoryItem> {
        Some(NewInventoryItem {
            name: patch.name?,
            quantity: patch.quantity?,
        })
    }

    fn insert_assignments(new: &NewInventoryItem) -> Assignments {
        Assignments::new()
            .set("name", new.name.as_str())
            .set("quantity", new.quantity.as_str())
    }

    fn patch_assignments(patch: &InventoryPatch) -> Assignments {
        Assignments::new()
            .set_opt("name", patch.name.as_deref())
            .set_opt("quantity", patch.quantity.as_deref())
    }
}
