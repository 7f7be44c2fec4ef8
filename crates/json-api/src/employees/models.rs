//! Employee Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use till_app::domain::employees::{data::EmployeeDetails, records::EmployeeRecord};

/// Employee Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub phone_number: String,
}

impl From<EmployeeRequest> for EmployeeDetails {
    fn from(request: EmployeeRequest) -> Self {
        EmployeeDetails {
            first_name: request.first_name,
            last_name: request.last_name,
            position: request.position,
            phone_number: request.phone_number,
        }
    }
}

/// Employee Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub phone_number: String,
}

impl From<EmployeeRecord> for EmployeeResponse {
    fn from(employee: EmployeeRecord) -> Self {
        Self {
            id: employee.id.into_i64(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            phone_number: employee.phone_number,
        }
    }
}
