//! Expense Repository

use chrono::Utc;
use shared::models::{Expense, ExpenseCreate, ExpenseUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct ExpenseRepository {
    db: Database,
}

impl ExpenseRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Expense> {
        self.db.read(|store| store.expenses.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Expense> {
        self.db.read(|store| store.expenses.get(id).cloned())
    }

    /// Create an expense. `total` is stored as submitted.
    pub fn create(&self, data: ExpenseCreate) -> RepoResult<Expense> {
        self.db.write(|store| {
            let expense = Expense {
                id: new_id(),
                expense_date: data.expense_date,
                category_id: data.category_id,
                description: data.description,
                amount: data.amount,
                unit: data.unit,
                quantity: data.quantity,
                total: data.total,
                created_at: Utc::now(),
            };
            store.expenses.insert(expense.id.clone(), expense.clone());
            Ok(expense)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: ExpenseUpdate) -> RepoResult<Expense> {
        self.db.write(|store| {
            let expense = store
                .expenses
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Expense {} not found", id)))?;

            if let Some(expense_date) = data.expense_date {
                expense.expense_date = expense_date;
            }
            if let Some(category_id) = data.category_id {
                expense.category_id = category_id;
            }
            if let Some(description) = data.description {
                expense.description = description;
            }
            if let Some(amount) = data.amount {
                expense.amount = amount;
            }
            if let Some(unit) = data.unit {
                expense.unit = unit;
            }
            if let Some(quantity) = data.quantity {
                expense.quantity = quantity;
            }
            if let Some(total) = data.total {
                expense.total = total;
            }
            Ok(expense.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.expenses.remove(id).is_some())
    }
}
