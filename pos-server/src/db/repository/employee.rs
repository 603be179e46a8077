//! Employee Repository

use chrono::Utc;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct EmployeeRepository {
    db: Database,
}

impl EmployeeRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Employee> {
        self.db.read(|store| store.employees.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Employee> {
        self.db.read(|store| store.employees.get(id).cloned())
    }

    /// Create an employee; the badge number must be unique
    pub fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        self.db.write(|store| {
            if store
                .employees
                .values()
                .any(|e| e.employee_id == data.employee_id)
            {
                return Err(RepoError::Duplicate(format!(
                    "Employee id '{}' already exists",
                    data.employee_id
                )));
            }

            let employee = Employee {
                id: new_id(),
                employee_id: data.employee_id,
                name: data.name,
                position: data.position,
                department: data.department,
                email: data.email,
                phone: data.phone,
                joining_date: data.joining_date,
                salary: data.salary,
                photo_url: data.photo_url,
                status: data.status.unwrap_or_else(|| "active".to_string()),
                created_at: Utc::now(),
            };
            store.employees.insert(employee.id.clone(), employee.clone());
            Ok(employee)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        self.db.write(|store| {
            if let Some(ref new_badge) = data.employee_id
                && store
                    .employees
                    .values()
                    .any(|e| e.id != id && &e.employee_id == new_badge)
            {
                return Err(RepoError::Duplicate(format!(
                    "Employee id '{}' already exists",
                    new_badge
                )));
            }

            let employee = store
                .employees
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

            if let Some(employee_id) = data.employee_id {
                employee.employee_id = employee_id;
            }
            if let Some(name) = data.name {
                employee.name = name;
            }
            if let Some(position) = data.position {
                employee.position = position;
            }
            if let Some(department) = data.department {
                employee.department = department;
            }
            if let Some(email) = data.email {
                employee.email = Some(email);
            }
            if let Some(phone) = data.phone {
                employee.phone = Some(phone);
            }
            if let Some(joining_date) = data.joining_date {
                employee.joining_date = joining_date;
            }
            if let Some(salary) = data.salary {
                employee.salary = salary;
            }
            if let Some(photo_url) = data.photo_url {
                employee.photo_url = Some(photo_url);
            }
            if let Some(status) = data.status {
                employee.status = status;
            }
            Ok(employee.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.employees.remove(id).is_some())
    }
}
