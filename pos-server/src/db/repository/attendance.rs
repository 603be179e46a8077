//! Attendance Repository

use chrono::{NaiveDate, Utc};
use shared::models::{Attendance, AttendanceCreate, AttendanceUpdate};

use super::{RepoError, RepoResult};
use crate::db::{Database, new_id};

#[derive(Clone)]
pub struct AttendanceRepository {
    db: Database,
}

impl AttendanceRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn find_all(&self) -> Vec<Attendance> {
        self.db.read(|store| store.attendance.values().cloned().collect())
    }

    /// Records on one calendar day
    pub fn find_by_date(&self, date: NaiveDate) -> Vec<Attendance> {
        self.db.read(|store| {
            store
                .attendance
                .values()
                .filter(|a| a.date.date_naive() == date)
                .cloned()
                .collect()
        })
    }

    pub fn find_by_employee(&self, employee_id: &str) -> Vec<Attendance> {
        self.db.read(|store| {
            store
                .attendance
                .values()
                .filter(|a| a.employee_id == employee_id)
                .cloned()
                .collect()
        })
    }

    pub fn create(&self, data: AttendanceCreate) -> RepoResult<Attendance> {
        self.db.write(|store| {
            let attendance = Attendance {
                id: new_id(),
                employee_id: data.employee_id,
                date: data.date,
                check_in: data.check_in,
                check_out: data.check_out,
                status: data.status,
                created_at: Utc::now(),
            };
            store
                .attendance
                .insert(attendance.id.clone(), attendance.clone());
            Ok(attendance)
        })
    }

    /// Shallow merge update
    pub fn update(&self, id: &str, data: AttendanceUpdate) -> RepoResult<Attendance> {
        self.db.write(|store| {
            let attendance = store.attendance.get_mut(id).ok_or_else(|| {
                RepoError::NotFound(format!("Attendance record {} not found", id))
            })?;

            if let Some(employee_id) = data.employee_id {
                attendance.employee_id = employee_id;
            }
            if let Some(date) = data.date {
                attendance.date = date;
            }
            if let Some(check_in) = data.check_in {
                attendance.check_in = Some(check_in);
            }
            if let Some(check_out) = data.check_out {
                attendance.check_out = Some(check_out);
            }
            if let Some(status) = data.status {
                attendance.status = status;
            }
            Ok(attendance.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.db.write(|store| store.attendance.remove(id).is_some())
    }
}
