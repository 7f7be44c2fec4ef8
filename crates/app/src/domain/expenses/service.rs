//! Expenses service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        expenses::{
            data::NewExpense, errors::ExpensesServiceError, records::ExpenseRecord,
            repository::PgExpensesRepository,
        },
        periods::Month,
    },
};

#[derive(Debug, Clone)]
pub struct PgExpensesService {
    db: Db,
    repository: PgExpensesRepository,
}

impl PgExpensesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgExpensesRepository::new(),
        }
    }
}

#[async_trait]
impl ExpensesService for PgExpensesService {
    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpensesServiceError> {
        let mut tx = self.db.begin().await?;

        let expenses = self.repository.list_expenses(&mut tx).await?;

        tx.commit().await?;

        Ok(expenses)
    }

    async fn list_expenses_in_month(
        &self,
        month: Month,
    ) -> Result<Vec<ExpenseRecord>, ExpensesServiceError> {
        let mut tx = self.db.begin().await?;

        let expenses = self
            .repository
            .list_expenses_between(&mut tx, month.first_day(), month.last_day())
            .await?;

        tx.commit().await?;

        Ok(expenses)
    }

    async fn create_expense(
        &self,
        expense: NewExpense,
    ) -> Result<ExpenseRecord, ExpensesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_expense(&mut tx, &expense).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ExpensesService: Send + Sync {
    /// Retrieves every expense record.
    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpensesServiceError>;

    /// Retrieves expense records dated within a calendar month.
    async fn list_expenses_in_month(
        &self,
        month: Month,
    ) -> Result<Vec<ExpenseRecord>, ExpensesServiceError>;

    /// Records an expense.
    async fn create_expense(
        &self,
        expense: NewExpense,
    ) -> Result<ExpenseRecord, ExpensesServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Date, date};
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn expense(name: &str, day: Date) -> NewExpense {
        NewExpense {
            transaction_name: "Restock".to_string(),
            expense_name: name.to_string(),
            amount: 3,
            price: Decimal::new(12000, 2),
            transaction_date: day,
            total_expenses: Decimal::new(36000, 2),
        }
    }

    #[tokio::test]
    async fn create_expense_returns_stored_record() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .expenses
            .create_expense(expense("LPG refill", date(2024, 8, 14)))
            .await?;

        assert_eq!(created.expense_name, "LPG refill");
        assert_eq!(created.total_expenses, Decimal::new(36000, 2));
        assert_eq!(created.transaction_date, date(2024, 8, 14));

        Ok(())
    }

    #[tokio::test]
    async fn list_expenses_in_month_filters_by_date() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.expenses
            .create_expense(expense("Ice", date(2024, 7, 31)))
            .await?;
        ctx.expenses
            .create_expense(expense("Rent", date(2024, 8, 1)))
            .await?;

        let august = ctx
            .expenses
            .list_expenses_in_month(Month::new(2024, 8)?)
            .await?;

        assert_eq!(august.len(), 1);
        assert_eq!(
            august.first().map(|e| e.expense_name.as_str()),
            Some("Rent")
        );
        assert_eq!(ctx.expenses.list_expenses().await?.len(), 2);

        Ok(())
    }
}
