use crate::api::{AttendanceRecord, AttendanceStatus, NewEmployee};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn is_valid(&self) -> bool {
        !(self.employee_id.trim().is_empty()
            || self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.department.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTotals {
    pub present: usize,
    pub absent: usize,
}

pub fn attendance_totals(history: &[AttendanceRecord]) -> AttendanceTotals {
    history
        .iter()
        .fold(AttendanceTotals::default(), |mut totals, record| {
            match record.status {
                AttendanceStatus::Present => totals.present += 1,
                AttendanceStatus::Absent => totals.absent += 1,
            }
            totals
        })
}
