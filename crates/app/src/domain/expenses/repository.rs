//! Expenses Repository

use jiff::civil::Date;
use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::expenses::{
    data::NewExpense,
    records::{ExpenseId, ExpenseRecord},
};

const LIST_EXPENSES_SQL: &str = include_str!("sql/list_expenses.sql");
const LIST_EXPENSES_BETWEEN_SQL: &str = include_str!("sql/list_expenses_between.sql");
const CREATE_EXPENSE_SQL: &str = include_str!("sql/create_expense.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgExpensesRepository;

impl PgExpensesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_expenses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ExpenseRecord>, sqlx::Error> {
        query_as::<Postgres, ExpenseRecord>(LIST_EXPENSES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_expenses_between(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        from: Date,
        to: Date,
    ) -> Result<Vec<ExpenseRecord>, sqlx::Error> {
        query_as::<Postgres, ExpenseRecord>(LIST_EXPENSES_BETWEEN_SQL)
            .bind(SqlxDate::from(from))
            .bind(SqlxDate::from(to))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_expense(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        expense: &NewExpense,
    ) -> Result<ExpenseRecord, sqlx::Error> {
        let amount =
            i32::try_from(expense.amount).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, ExpenseRecord>(CREATE_EXPENSE_SQL)
            .bind(&expense.transaction_name)
            .bind(&expense.expense_name)
            .bind(amount)
            .bind(expense.price)
            .bind(SqlxDate::from(expense.transaction_date))
            .bind(expense.total_expenses)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ExpenseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount_i32: i32 = row.try_get("amount")?;

        let amount = u32::try_from(amount_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: ExpenseId::from_i64(row.try_get("id")?),
            transaction_name: row.try_get("transaction_name")?,
            expense_name: row.try_get("expense_name")?,
            amount,
            price: row.try_get("price")?,
            transaction_date: row.try_get::<SqlxDate, _>("transaction_date")?.to_jiff(),
            total_expenses: row.try_get("total_expenses")?,
        })
    }
}
