//! Repository Module
//!
//! CRUD access to the in-memory store. Repositories are the only path to
//! the tables; handlers and the reporting engine never touch the maps
//! directly, so a persistent backend could be substituted behind the same
//! API without touching business logic.
//!
//! Updates are shallow merges (fields present in the payload replace
//! current values); deletes remove the map entry. Only Order cascades
//! (to its items).

// Catalog
pub mod category;
pub mod product;

// Floor
pub mod dining_table;

// Orders
pub mod order;

// Money out
pub mod expense;
pub mod expense_category;
pub mod purchase;

// HR
pub mod attendance;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod staff_salary;

// System
pub mod settings;

// Re-exports
pub use attendance::AttendanceRepository;
pub use category::CategoryRepository;
pub use dining_table::DiningTableRepository;
pub use employee::EmployeeRepository;
pub use expense::ExpenseRepository;
pub use expense_category::ExpenseCategoryRepository;
pub use leave::LeaveRepository;
pub use order::OrderRepository;
pub use payroll::PayrollRepository;
pub use product::ProductRepository;
pub use purchase::PurchaseRepository;
pub use settings::SettingsRepository;
pub use staff_salary::StaffSalaryRepository;

use shared::order::InvalidTransition;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    IllegalTransition(#[from] InvalidTransition),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
