pub mod detail;
pub mod form;
pub mod list;

pub use detail::EmployeeDetailDrawer;
pub use form::EmployeeFormModal;
pub use list::EmployeeList;
