//! 数据库层 - 进程内存储
//!
//! 所有状态保存在进程内的 HashMap 表中，随进程退出丢失（无持久化，
//! 这是刻意的）。业务逻辑只通过 [`repository`] 访问数据，
//! 以便将来替换为持久化后端时不触碰业务代码。
//!
//! # 单元操作
//!
//! - [`Database::read`] - 共享读
//! - [`Database::write`] - 单步写
//! - [`Database::transaction`] - 多步写，失败时回滚到快照

pub mod repository;
pub mod seed;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use shared::models::{
    Attendance, Category, DiningTable, Employee, Expense, ExpenseCategory, Leave, Order,
    OrderItem, Payroll, Product, Purchase, Settings, StaffSalary,
};

use self::repository::RepoResult;

/// Starting value of the order-number sequence for an empty store
const ORDER_COUNTER_START: u64 = 20;

/// All tables plus the order-number sequence and the settings singleton.
///
/// `Clone` is what makes [`Database::transaction`] rollback possible:
/// datasets are process-lifetime small, so a snapshot is a cheap copy.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) categories: HashMap<String, Category>,
    pub(crate) products: HashMap<String, Product>,
    pub(crate) tables: HashMap<String, DiningTable>,
    pub(crate) orders: HashMap<String, Order>,
    pub(crate) order_items: HashMap<String, OrderItem>,
    pub(crate) expense_categories: HashMap<String, ExpenseCategory>,
    pub(crate) expenses: HashMap<String, Expense>,
    pub(crate) purchases: HashMap<String, Purchase>,
    pub(crate) employees: HashMap<String, Employee>,
    pub(crate) attendance: HashMap<String, Attendance>,
    pub(crate) leaves: HashMap<String, Leave>,
    pub(crate) payroll: HashMap<String, Payroll>,
    pub(crate) staff_salaries: HashMap<String, StaffSalary>,
    pub(crate) settings: Option<Settings>,
    order_counter: u64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
            products: HashMap::new(),
            tables: HashMap::new(),
            orders: HashMap::new(),
            order_items: HashMap::new(),
            expense_categories: HashMap::new(),
            expenses: HashMap::new(),
            purchases: HashMap::new(),
            employees: HashMap::new(),
            attendance: HashMap::new(),
            leaves: HashMap::new(),
            payroll: HashMap::new(),
            staff_salaries: HashMap::new(),
            settings: None,
            order_counter: ORDER_COUNTER_START,
        }
    }

    /// Next order number; the sequence is store-owned and advanced under
    /// the store lock, never a module global.
    pub(crate) fn next_order_number(&mut self) -> String {
        let number = self.order_counter;
        self.order_counter += 1;
        number.to_string()
    }

    /// Reposition the sequence (used by the demo seed)
    pub(crate) fn set_order_counter(&mut self, value: u64) {
        self.order_counter = value;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the in-memory store.
///
/// Cheap to clone; all clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct Database {
    inner: Arc<RwLock<Store>>,
}

impl Database {
    /// Empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Store::new())),
        }
    }

    /// Store pre-loaded with the demo dataset
    pub fn seeded() -> Self {
        let db = Self::new();
        db.write(seed::seed_demo_data);
        db
    }

    /// Run a read-only closure under the shared lock
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a single-step mutation under the exclusive lock
    pub fn write<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Unit of work: multi-step mutations are all-or-nothing.
    ///
    /// Takes the exclusive lock, snapshots the store, applies `f`, and
    /// restores the snapshot when `f` errors. No request observes a
    /// half-applied mutation.
    pub fn transaction<R>(&self, f: impl FnOnce(&mut Store) -> RepoResult<R>) -> RepoResult<R> {
        let mut guard = self.inner.write();
        let snapshot = guard.clone();
        match f(&mut guard) {
            Ok(value) => Ok(value),
            Err(e) => {
                *guard = snapshot;
                Err(e)
            }
        }
    }
}

/// Fresh opaque entity id
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use shared::models::Category;

    #[test]
    fn order_numbers_are_sequential_from_20() {
        let db = Database::new();
        let first = db.write(|store| store.next_order_number());
        let second = db.write(|store| store.next_order_number());
        assert_eq!(first, "20");
        assert_eq!(second, "21");
    }

    #[test]
    fn transaction_rolls_back_on_error() {
        let db = Database::new();
        let result: RepoResult<()> = db.transaction(|store| {
            store.categories.insert(
                "c1".to_string(),
                Category {
                    id: "c1".to_string(),
                    name: "Drinks".to_string(),
                    slug: "drinks".to_string(),
                },
            );
            store.next_order_number();
            Err(RepoError::Validation("boom".to_string()))
        });
        assert!(result.is_err());

        // Both the insert and the sequence advance are undone
        db.read(|store| assert!(store.categories.is_empty()));
        assert_eq!(db.write(|store| store.next_order_number()), "20");
    }

    #[test]
    fn clones_share_the_same_store() {
        let db = Database::new();
        let other = db.clone();
        db.write(|store| {
            store.categories.insert(
                "c1".to_string(),
                Category {
                    id: "c1".to_string(),
                    name: "Rice".to_string(),
                    slug: "rice".to_string(),
                },
            );
        });
        other.read(|store| assert_eq!(store.categories.len(), 1));
    }
}
