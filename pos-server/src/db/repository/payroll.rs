//! Payroll Repository

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{Payroll, PayrollCreate, PayrollUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct PayrollRepository {
    db: Database,
}

impl PayrollRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Payroll> {
        self.db.read(|store| store.payroll.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Payroll> {
        self.db.read(|store| store.payroll.get(id).cloned())
    }

    pub fn find_by_employee(&self, employee_id: &str) -> Vec<Payroll> {
        self.db.read(|store| {
            store
                .payroll
                .values()
                .filter(|p| p.employee_id == employee_id)
                .cloned()
                .collect()
        })
    }

    pub fn create(&self, data: PayrollCreate) -> RepoResult<Payroll> {
        self.db.write(|store| {
            let payroll = Payroll {
                id: new_id(),
                employee_id: data.employee_id,
                month: data.month,
                year: data.year,
                base_salary: data.base_salary,
                bonus: data.bonus.unwrap_or(Decimal::ZERO),
                deductions: data.deductions.unwrap_or(Decimal::ZERO),
                net_salary: data.net_salary,
                status: data.status.unwrap_or_else(|| "pending".to_string()),
                created_at: Utc::now(),
            };
            store.payroll.insert(payroll.id.clone(), payroll.clone());
            Ok(payroll)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: PayrollUpdate) -> RepoResult<Payroll> {
        self.db.write(|store| {
            let payroll = store
                .payroll
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Payroll {} not found", id)))?;

            if let Some(employee_id) = data.employee_id {
                payroll.employee_id = employee_id;
            }
            if let Some(month) = data.month {
                payroll.month = month;
            }
            if let Some(year) = data.year {
                payroll.year = year;
            }
            if let Some(base_salary) = data.base_salary {
                payroll.base_salary = base_salary;
            }
            if let Some(bonus) = data.bonus {
                payroll.bonus = bonus;
            }
            if let Some(deductions) = data.deductions {
                payroll.deductions = deductions;
            }
            if let Some(net_salary) = data.net_salary {
                payroll.net_salary = net_salary;
            }
            if let Some(status) = data.status {
                payroll.status = status;
            }
            Ok(payroll.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.payroll.remove(id).is_some())
    }
}
