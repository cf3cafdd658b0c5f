use crate::{
    api::{AttendanceStatus, Employee, NewAttendanceRecord},
    utils::time::{format_input_date, parse_input_date, today_local},
};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const UNKNOWN_EMPLOYEE: &str = "Unknown";
pub const SELECT_EMPLOYEE_MESSAGE: &str = "Please select an employee";
pub const SELECT_DATE_MESSAGE: &str = "Please select a date";

/// Employee names indexed by server id, rebuilt on every successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDirectory {
    names: HashMap<i64, String>,
}

impl EmployeeDirectory {
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            names: employees
                .iter()
                .map(|employee| (employee.id, employee.full_name.clone()))
                .collect(),
        }
    }

    pub fn display_name(&self, id: i64) -> &str {
        self.names
            .get(&id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_EMPLOYEE)
    }
}

pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} ({})", employee.full_name, employee.employee_id)
}

pub fn empty_state_description(filter: Option<NaiveDate>) -> &'static str {
    if filter.is_some() {
        "No records for selected date"
    } else {
        "Start by marking attendance for employees"
    }
}

/// Raw values of the mark-attendance form. `employee_id` and `date` hold
/// what the inputs hold and are parsed on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            date: format_input_date(today_local()),
            status: AttendanceStatus::Present,
        }
    }
}

impl AttendanceFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<NewAttendanceRecord, &'static str> {
        let employee_id = self
            .employee_id
            .trim()
            .parse::<i64>()
            .map_err(|_| SELECT_EMPLOYEE_MESSAGE)?;
        let date = parse_input_date(&self.date).ok_or(SELECT_DATE_MESSAGE)?;
        Ok(NewAttendanceRecord {
            employee_id,
            date,
            status: self.status,
        })
    }
}
