//! Sale Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    sales::{errors::into_status_error, models::SaleResponse},
    state::State,
};

/// Sale Index Handler
#[endpoint(
    tags("sales"),
    summary = "List Sales",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Every sale record"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<SaleResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sales = state
        .app
        .sales
        .list_sales()
        .await
        .map_err(into_status_error)?;

    Ok(Json(sales.into_iter().map(SaleResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use till_app::domain::sales::MockSalesService;

    use crate::test_helpers::{make_sale, sales_service};

    use super::*;

    #[tokio::test]
    async fn test_list_sales_renders_decimals_as_floats() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_list_sales()
            .once()
            .return_once(|| Ok(vec![make_sale(1, "Century Tuna", 2, 3875)]));

        let mut res = TestClient::get("http://example.com/sales")
            .send(&sales_service(sales, Router::with_path("sales").get(handler)))
            .await;

        let body: Vec<SaleResponse> = res.take_json().await?;
        let sale = body.first().ok_or("expected one sale")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);
        assert!((sale.price - 38.75).abs() < f64::EPSILON, "price {}", sale.price);
        assert!((sale.total_sales - 77.5).abs() < f64::EPSILON, "total {}", sale.total_sales);
        assert_eq!(sale.transaction_date, "2024-06-03");

        Ok(())
    }
}
