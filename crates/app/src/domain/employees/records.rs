//! Employee Records

use crate::ids::TypedId;

/// Employee Id
pub type EmployeeId = TypedId<EmployeeRecord>;

/// Employee Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub phone_number: String,
}
