//! Sales Data

use jiff::civil::Date;
use rust_decimal::Decimal;
use uuid::Uuid;

/// New Sale Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub batch_uuid: Option<Uuid>,
    pub transaction_name: String,
    pub sales_name: String,
    pub amount: u32,
    pub price: Decimal,
    pub transaction_date: Date,
    pub total_sales: Decimal,
}
