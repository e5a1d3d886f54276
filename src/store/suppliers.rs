//! Suppliers

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::collection::{Assignments, Record};
use super::serde_helpers::scalar_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierPatch {
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text::deserialize")]
    pub note: Option<String>,
}

impl Record for Supplier {
    const TABLE: &'static str = "suppliers";
    const SCHEMA: &'static str = "CREATE TABLE IF NOT EXISTS suppliers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        note TEXT NOT NULL
    )";

    type New = NewSupplier;
    type Patch = SupplierPatch;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            note: row.get("note")?,
        })
    }

    fn complete(patch: SupplierPatch) -> Option<NewSupplier> {
        Some(NewSupplier {
            name: patch.name?,
            note: patch.note?,
        })
    }

    fn insert_assignments(new: &NewSupplier) -> Assignments {
        Assignments::new()
            .set("name", new.name.as_str())
            .set("note", new.note.as_str())
    }

    fn patch_assignments(patch: &SupplierPatch) -> Assignments {
        Assignments::new()
            .set_opt("name", patch.name.as_deref())
            .set_opt("note", patch.note.as_deref())
    }
}
