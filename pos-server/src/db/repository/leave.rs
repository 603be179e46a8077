//! Leave Repository

use chrono::Utc;
use shared::models::{Leave, LeaveCreate, LeaveUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct LeaveRepository {
    db: Database,
}

impl LeaveRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Leave> {
        self.db.read(|store| store.leaves.values().cloned().collect())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Leave> {
        self.db.read(|store| store.leaves.get(id).cloned())
    }

    pub fn find_by_employee(&self, employee_id: &str) -> Vec<Leave> {
        self.db.read(|store| {
            store
                .leaves
                .values()
                .filter(|l| l.employee_id == employee_id)
                .cloned()
                .collect()
        })
    }

    pub fn create(&self, data: LeaveCreate) -> RepoResult<Leave> {
        self.db.write(|store| {
            let leave = Leave {
                id: new_id(),
                employee_id: data.employee_id,
                leave_type: data.leave_type,
                start_date: data.start_date,
                end_date: data.end_date,
                reason: data.reason,
                status: data.status.unwrap_or_else(|| "pending".to_string()),
                created_at: Utc::now(),
            };
            store.leaves.insert(leave.id.clone(), leave.clone());
            Ok(leave)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: LeaveUpdate) -> RepoResult<Leave> {
        self.db.write(|store| {
            let leave = store
                .leaves
                .get_mut(id)
                .ok_or_else(|| RepoError::NotFound(format!("Leave {} not found", id)))?;

            if let Some(employee_id) = data.employee_id {
                leave.employee_id = employee_id;
            }
            if let Some(leave_type) = data.leave_type {
                leave.leave_type = leave_type;
            }
            if let Some(start_date) = data.start_date {
                leave.start_date = start_date;
            }
            if let Some(end_date) = data.end_date {
                leave.end_date = end_date;
            }
            if let Some(reason) = data.reason {
                leave.reason = Some(reason);
            }
            if let Some(status) = data.status {
                leave.status = status;
            }
            Ok(leave.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.leaves.remove(id).is_some())
    }
}
