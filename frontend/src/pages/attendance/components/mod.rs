pub mod filter;
pub mod form;
pub mod records;

pub use filter::DateFilter;
pub use form::AttendanceFormModal;
pub use records::AttendanceRecords;
