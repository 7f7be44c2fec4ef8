//! Employees service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::employees::{
        data::EmployeeDetails,
        errors::EmployeesServiceError,
        records::{EmployeeId, EmployeeRecord},
        repository::PgEmployeesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgEmployeesService {
    db: Db,
    repository: PgEmployeesRepository,
}

impl PgEmployeesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgEmployeesRepository::new(),
        }
    }
}

#[async_trait]
impl EmployeesService for PgEmployeesService {
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError> {
        let mut tx = self.db.begin().await?;

        let employees = self.repository.list_employees(&mut tx).await?;

        tx.commit().await?;

        Ok(employees)
    }

    async fn create_employee(
        &self,
        details: EmployeeDetails,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_employee(&mut tx, &details).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_employee(
        &self,
        employee: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_employee(&mut tx, employee, &details)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_employee(&self, employee: EmployeeId) -> Result<(), EmployeesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_employee(&mut tx, employee).await?;

        if rows_affected == 0 {
            return Err(EmployeesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait EmployeesService: Send + Sync {
    /// Retrieves all employees.
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError>;

    /// Creates an employee.
    async fn create_employee(
        &self,
        details: EmployeeDetails,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Replaces an employee's details.
    async fn update_employee(
        &self,
        employee: EmployeeId,
        details: EmployeeDetails,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Deletes an employee.
    async fn delete_employee(&self, employee: EmployeeId) -> Result<(), EmployeesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn details(first_name: &str) -> EmployeeDetails {
        EmployeeDetails {
            first_name: first_name.to_string(),
            last_name: "Dela Cruz".to_string(),
            position: "Cashier".to_string(),
            phone_number: "09171234567".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_list_employees() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.employees.create_employee(details("Juan")).await?;
        let employees = ctx.employees.list_employees().await?;

        assert_eq!(employees, [created]);

        Ok(())
    }

    #[tokio::test]
    async fn update_employee_replaces_details() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.employees.create_employee(details("Juan")).await?;

        let updated = ctx
            .employees
            .update_employee(
                created.id,
                EmployeeDetails {
                    position: "Supervisor".to_string(),
                    ..details("Juan")
                },
            )
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.position, "Supervisor");

        Ok(())
    }

    #[tokio::test]
    async fn update_employee_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .employees
            .update_employee(EmployeeId::from_i64(9_999), details("Maria"))
            .await;

        assert!(
            matches!(result, Err(EmployeesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_employee_removes_row() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.employees.create_employee(details("Juan")).await?;

        ctx.employees.delete_employee(created.id).await?;

        assert!(ctx.employees.list_employees().await?.is_empty());

        let result = ctx.employees.delete_employee(created.id).await;

        assert!(
            matches!(result, Err(EmployeesServiceError::NotFound)),
            "expected NotFound on second delete, got {result:?}"
        );

        Ok(())
    }
}
