//! Staff Salary Repository

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{StaffSalary, StaffSalaryCreate, StaffSalaryUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct StaffSalaryRepository {
    db: Database,
}

impl StaffSalaryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<StaffSalary> {
        self.db
            .read(|store| store.staff_salaries.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<StaffSalary> {
        self.db.read(|store| store.staff_salaries.get(id).cloned())
    }

    pub fn create(&self, data: StaffSalaryCreate) -> RepoResult<StaffSalary> {
        self.db.write(|store| {
            let salary = StaffSalary {
                id: new_id(),
                employee_id: data.employee_id,
                salary_date: data.salary_date,
                salary_amount: data.salary_amount,
                deduct_salary: data.deduct_salary.unwrap_or(Decimal::ZERO),
                total_salary: data.total_salary,
                created_at: Utc::now(),
            };
            store
                .staff_salaries
                .insert(salary.id.clone(), salary.clone());
            Ok(salary)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: StaffSalaryUpdate) -> RepoResult<StaffSalary> {
        self.db.write(|store| {
            let salary = store
                .staff_salaries
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Staff salary {} not found", id)))?;

            if let Some(employee_id) = data.employee_id {
                salary.employee_id = employee_id;
            }
            if let Some(salary_date) = data.salary_date {
                salary.salary_date = salary_date;
            }
            if let Some(salary_amount) = data.salary_amount {
                salary.salary_amount = salary_amount;
            }
            if let Some(deduct_salary) = data.deduct_salary {
                salary.deduct_salary = deduct_salary;
            }
            if let Some(total_salary) = data.total_salary {
                salary.total_salary = total_salary;
            }
            Ok(salary.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db
            .write(|store| store.staff_salaries.remove(id).is_some())
    }
}
