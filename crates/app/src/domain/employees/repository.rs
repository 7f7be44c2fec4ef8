//! Employees Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::employees::{
    data::EmployeeDetails,
    records::{EmployeeId, EmployeeRecord},
};

const LIST_EMPLOYEES_SQL: &str = include_str!("sql/list_employees.sql");
const CREATE_EMPLOYEE_SQL: &str = include_str!("sql/create_employee.sql");
const UPDATE_EMPLOYEE_SQL: &str = include_str!("sql/update_employee.sql");
const DELETE_EMPLOYEE_SQL: &str = include_str!("sql/delete_employee.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEmployeesRepository;

impl PgEmployeesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_employees(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
        query_as::<Postgres, EmployeeRecord>(LIST_EMPLOYEES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        details: &EmployeeDetails,
    ) -> Result<EmployeeRecord, sqlx::Error> {
        query_as::<Postgres, EmployeeRecord>(CREATE_EMPLOYEE_SQL)
            .bind(&details.first_name)
            .bind(&details.last_name)
            .bind(&details.position)
            .bind(&details.phone_number)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<EmployeeRecord, sqlx::Error> {
        query_as::<Postgres, EmployeeRecord>(UPDATE_EMPLOYEE_SQL)
            .bind(employee.into_i64())
            .bind(&details.first_name)
            .bind(&details.last_name)
            .bind(&details.position)
            .bind(&details.phone_number)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_EMPLOYEE_SQL)
            .bind(employee.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for EmployeeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: EmployeeId::from_i64(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            position: row.try_get("position")?,
            phone_number: row.try_get("phone_number")?,
        })
    }
}
