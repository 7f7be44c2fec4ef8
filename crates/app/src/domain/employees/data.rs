//! Employees Data

/// Employee details, used both to create and to replace an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub phone_number: String,
}
