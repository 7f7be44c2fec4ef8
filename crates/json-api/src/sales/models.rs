//! Sale Models

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use till_app::domain::sales::{data::NewSale, records::SaleRecord};

use crate::{
    decimal::{from_float, to_float},
    fields::{INVALID_INPUT, non_blank, parse_date, parse_quantity},
};

/// Sale Request
///
/// Every field except `batch_uuid` is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleRequest {
    pub batch_uuid: Option<Uuid>,
    pub transaction_name: Option<String>,
    pub sales_name: Option<String>,
    pub amount: Option<i64>,
    pub price: Option<f64>,
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose UTC date is used
    pub transaction_date: Option<String>,
    pub total_sales: Option<f64>,
}

impl TryFrom<SaleRequest> for NewSale {
    type Error = StatusError;

    fn try_from(request: SaleRequest) -> Result<Self, Self::Error> {
        let invalid = || StatusError::bad_request().brief(INVALID_INPUT);

        Ok(NewSale {
            batch_uuid: request.batch_uuid,
            transaction_name: non_blank(request.transaction_name).ok_or_else(invalid)?,
            sales_name: non_blank(request.sales_name).ok_or_else(invalid)?,
            amount: parse_quantity(request.amount).ok_or_else(invalid)?,
            price: request.price.and_then(from_float).ok_or_else(invalid)?,
            transaction_date: request
                .transaction_date
                .as_deref()
                .and_then(parse_date)
                .ok_or_else(invalid)?,
            total_sales: request.total_sales.and_then(from_float).ok_or_else(invalid)?,
        })
    }
}

/// Sale Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleResponse {
    pub id: i64,
    /// Shared by every record committed in the same register checkout
    pub batch_uuid: Option<Uuid>,
    pub transaction_name: String,
    pub sales_name: String,
    pub amount: u32,
    pub price: f64,
    /// `YYYY-MM-DD`
    pub transaction_date: String,
    pub total_sales: f64,
}

impl From<SaleRecord> for SaleResponse {
    fn from(sale: SaleRecord) -> Self {
        Self {
            id: sale.id.into_i64(),
            batch_uuid: sale.batch_uuid,
            transaction_name: sale.transaction_name,
            sales_name: sale.sales_name,
            amount: sale.amount,
            price: to_float(sale.price),
            transaction_date: sale.transaction_date.to_string(),
            total_sales: to_float(sale.total_sales),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn valid() -> SaleRequest {
        SaleRequest {
            batch_uuid: None,
            transaction_name: Some("POS Sale - 2024-06-03".to_string()),
            sales_name: Some("Century Tuna".to_string()),
            amount: Some(2),
            price: Some(38.75),
            transaction_date: Some("2024-06-03".to_string()),
            total_sales: Some(77.5),
        }
    }

    #[test]
    fn valid_request_converts() -> TestResult {
        let sale = NewSale::try_from(valid())?;

        assert_eq!(sale.amount, 2);
        assert_eq!(sale.price, Decimal::new(3875, 2));
        assert_eq!(sale.total_sales, Decimal::new(7750, 2));
        assert_eq!(sale.transaction_date, date(2024, 6, 3));

        Ok(())
    }

    #[test]
    fn missing_or_malformed_fields_are_rejected() {
        let cases = [
            SaleRequest {
                transaction_name: None,
                ..valid()
            },
            SaleRequest {
                sales_name: Some("  ".to_string()),
                ..valid()
            },
            SaleRequest {
                amount: Some(0),
                ..valid()
            },
            SaleRequest {
                price: Some(f64::NAN),
                ..valid()
            },
            SaleRequest {
                transaction_date: Some("yesterday".to_string()),
                ..valid()
            },
            SaleRequest {
                total_sales: None,
                ..valid()
            },
        ];

        for case in cases {
            assert!(
                NewSale::try_from(case.clone()).is_err(),
                "expected {case:?} to be rejected"
            );
        }
    }
}
