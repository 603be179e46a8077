//! Dining Table Repository

use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct DiningTableRepository {
    db: Database,
}

impl DiningTableRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<DiningTable> {
        self.db.read(|store| store.tables.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<DiningTable> {
        self.db.read(|store| store.tables.get(id).cloned())
    }

    /// Create a table; the table number must be unique
    pub fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        self.db.write(|store| {
            if store
                .tables
                .values()
                .any(|t| t.table_number == data.table_number)
            {
                return Err(RepoError::Duplicate(format!(
                    "Table number '{}' already exists",
                    data.table_number
                )));
            }

            let table = DiningTable {
                id: new_id(),
                table_number: data.table_number,
                capacity: data.capacity,
                description: data.description,
                status: data.status.unwrap_or_else(|| "available".to_string()),
            };
            store.tables.insert(table.id.clone(), table.clone());
            Ok(table)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        self.db.write(|store| {
            if let Some(ref new_number) = data.table_number
                && store
                    .tables
                    .values()
                    .any(|t| t.id != id && &t.table_number == new_number)
            {
                return Err(RepoError::Duplicate(format!(
                    "Table number '{}' already exists",
                    new_number
                )));
            }

            let table = store
                .tables
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))?;

            if let Some(table_number) = data.table_number {
                table.table_number = table_number;
            }
            if let Some(capacity) = data.capacity {
                table.capacity = Some(capacity);
            }
            if let Some(description) = data.description {
                table.description = Some(description);
            }
            if let Some(status) = data.status {
                table.status = status;
            }
            Ok(table.clone())
        })
    }

    /// Direct status set (e.g. staff marking a table reserved)
    pub fn update_status(&self, id: &str, status: String) -> RepoResult<DiningTable> {
        self.db.write(|store| {
            let table = store
                .tables
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Table {} not found", id)))?;
            table.status = status;
            Ok(table.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.tables.remove(id).is_some())
    }
}
