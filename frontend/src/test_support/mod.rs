#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use chrono::NaiveDate;

    pub fn employee(id: i64, code: &str, name: &str) -> Employee {
        Employee {
            id,
            employee_id: code.into(),
            full_name: name.into(),
            email: format!("{}@company.com", code.to_lowercase()),
            department: "Engineering".into(),
        }
    }

    pub fn attendance(id: i64, employee_id: i64, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
            status,
        }
    }

    pub fn employee_json(id: i64, code: &str, name: &str) -> serde_json::Value {
        serde_json::to_value(employee(id, code, name)).expect("serializable employee")
    }

    pub fn attendance_json(id: i64, employee_id: i64, date: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "employee_id": employee_id,
            "date": date,
            "status": status
        })
    }
}
