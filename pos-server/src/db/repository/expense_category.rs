//! Expense Category Repository

use shared::models::{ExpenseCategory, ExpenseCategoryCreate, ExpenseCategoryUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct ExpenseCategoryRepository {
    db: Database,
}

impl ExpenseCategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<ExpenseCategory> {
        self.db
            .read(|store| store.expense_categories.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<ExpenseCategory> {
        self.db
            .read(|store| store.expense_categories.get(id).cloned())
    }

    /// Create an expense category; the name must be unique
    pub fn create(&self, data: ExpenseCategoryCreate) -> RepoResult<ExpenseCategory> {
        self.db.write(|store| {
            if store
                .expense_categories
                .values()
                .any(|c| c.name == data.name)
            {
                return Err(RepoError::Duplicate(format!(
                    "Expense category '{}' already exists",
                    data.name
                )));
            }

            let category = ExpenseCategory {
                id: new_id(),
                name: data.name,
                description: data.description,
            };
            store
                .expense_categories
                .insert(category.id.clone(), category.clone());
            Ok(category)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: ExpenseCategoryUpdate) -> RepoResult<ExpenseCategory> {
        self.db.write(|store| {
            if let Some(ref new_name) = data.name
                && store
                    .expense_categories
                    .values()
                    .any(|c| c.id != id && &c.name == new_name)
            {
                return Err(RepoError::Duplicate(format!(
                    "Expense category '{}' already exists",
                    new_name
                )));
            }

            let category = store.expense_categories.get_mut(id).ok_or_else(|| {
                RepoError::NotFound(format!("Expense category {} not found", id))
            })?;

            if let Some(name) = data.name {
                category.name = name;
            }
            if let Some(description) = data.description {
                category.description = Some(description);
            }
            Ok(category.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db
            .write(|store| store.expense_categories.remove(id).is_some())
    }
}
