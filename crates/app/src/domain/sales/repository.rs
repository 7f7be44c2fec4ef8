//! Sales Repository

use jiff::civil::Date;
use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::sales::{
    data::NewSale,
    records::{SaleId, SaleRecord},
};

const LIST_SALES_SQL: &str = include_str!("sql/list_sales.sql");
const LIST_SALES_BETWEEN_SQL: &str = include_str!("sql/list_sales_between.sql");
const CREATE_SALE_SQL: &str = include_str!("sql/create_sale.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSalesRepository;

impl PgSalesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_sales(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(LIST_SALES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_sales_between(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        from: Date,
        to: Date,
    ) -> Result<Vec<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(LIST_SALES_BETWEEN_SQL)
            .bind(SqlxDate::from(from))
            .bind(SqlxDate::from(to))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_sale(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sale: &NewSale,
    ) -> Result<SaleRecord, sqlx::Error> {
        let amount = i32::try_from(sale.amount).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        query_as::<Postgres, SaleRecord>(CREATE_SALE_SQL)
            .bind(sale.batch_uuid)
            .bind(&sale.transaction_name)
            .bind(&sale.sales_name)
            .bind(amount)
            .bind(sale.price)
            .bind(SqlxDate::from(sale.transaction_date))
            .bind(sale.total_sales)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SaleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount_i32: i32 = row.try_get("amount")?;

        let amount = u32::try_from(amount_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: SaleId::from_i64(row.try_get("id")?),
            batch_uuid: row.try_get("batch_uuid")?,
            transaction_name: row.try_get("transaction_name")?,
            sales_name: row.try_get("sales_name")?,
            amount,
            price: row.try_get("price")?,
            transaction_date: row.try_get::<SqlxDate, _>("transaction_date")?.to_jiff(),
            total_sales: row.try_get("total_sales")?,
        })
    }
}
