//! Daily Sales Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    sales::{errors::into_status_error, models::SaleResponse},
    state::State,
};

/// Daily Sales Handler
///
/// Sales dated within the requested calendar month.
#[endpoint(
    tags("sales"),
    summary = "List Sales In Month",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sales within the month"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid year or month"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    year: QueryParam<i16, true>,
    month: QueryParam<i8, true>,
    depot: &mut Depot,
) -> Result<Json<Vec<SaleResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let month = (year, month).into_month()?;

    let sales = state
        .app
        .sales
        .list_sales_in_month(month)
        .await
        .map_err(into_status_error)?;

    Ok(Json(sales.into_iter().map(SaleResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use till_app::domain::{periods::Month, sales::MockSalesService};

    use crate::test_helpers::{make_sale, sales_service};

    use super::*;

    fn make_service(sales: MockSalesService) -> Service {
        sales_service(sales, Router::with_path("daily-sales").get(handler))
    }

    #[tokio::test]
    async fn test_daily_sales_filters_by_month() -> TestResult {
        let june = Month::new(2024, 6)?;

        let mut sales = MockSalesService::new();

        sales
            .expect_list_sales_in_month()
            .once()
            .withf(move |month| *month == june)
            .return_once(|_| Ok(vec![make_sale(3, "Bear Brand", 1, 1250)]));

        let mut res = TestClient::get("http://example.com/daily-sales?year=2024&month=6")
            .send(&make_service(sales))
            .await;

        let body: Vec<SaleResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_daily_sales_rejects_invalid_month() {
        let mut sales = MockSalesService::new();

        sales.expect_list_sales_in_month().never();

        let res = TestClient::get("http://example.com/daily-sales?year=2024&month=13")
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_daily_sales_requires_query() {
        let mut sales = MockSalesService::new();

        sales.expect_list_sales_in_month().never();

        let res = TestClient::get("http://example.com/daily-sales")
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
