//! Sale Records

use jiff::civil::Date;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ids::TypedId;

/// Sale Id
pub type SaleId = TypedId<SaleRecord>;

/// Sale Record
///
/// One row per cart line. Rows committed together share `batch_uuid`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub id: SaleId,
    pub batch_uuid: Option<Uuid>,
    pub transaction_name: String,
    pub sales_name: String,
    pub amount: u32,
    pub price: Decimal,
    pub transaction_date: Date,
    pub total_sales: Decimal,
}
