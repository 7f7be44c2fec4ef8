//! Sales service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        periods::Month,
        sales::{
            data::NewSale, errors::SalesServiceError, records::SaleRecord,
            repository::PgSalesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgSalesService {
    db: Db,
    repository: PgSalesRepository,
}

impl PgSalesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSalesRepository::new(),
        }
    }
}

#[async_trait]
impl SalesService for PgSalesService {
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let sales = self.repository.list_sales(&mut tx).await?;

        tx.commit().await?;

        Ok(sales)
    }

    async fn list_sales_in_month(
        &self,
        month: Month,
    ) -> Result<Vec<SaleRecord>, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let sales = self
            .repository
            .list_sales_between(&mut tx, month.first_day(), month.last_day())
            .await?;

        tx.commit().await?;

        Ok(sales)
    }

    async fn create_sale(&self, sale: NewSale) -> Result<SaleRecord, SalesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_sale(&mut tx, &sale).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_sales(
        &self,
        sales: Vec<NewSale>,
    ) -> Result<Vec<SaleRecord>, SalesServiceError> {
        if sales.is_empty() {
            return Err(SalesServiceError::EmptyBatch);
        }

        let mut tx = self.db.begin().await?;
        let mut created = Vec::with_capacity(sales.len());

        for sale in &sales {
            created.push(self.repository.create_sale(&mut tx, sale).await?);
        }

        tx.commit().await?;

        info!(count = created.len(), "recorded sale batch");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Retrieves every sale record.
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, SalesServiceError>;

    /// Retrieves sale records dated within a calendar month.
    async fn list_sales_in_month(&self, month: Month) -> Result<Vec<SaleRecord>, SalesServiceError>;

    /// Records one sale.
    async fn create_sale(&self, sale: NewSale) -> Result<SaleRecord, SalesServiceError>;

    /// Records several sales in one transaction; either all rows are stored or none are.
    async fn create_sales(&self, sales: Vec<NewSale>) -> Result<Vec<SaleRecord>, SalesServiceError>;
}
