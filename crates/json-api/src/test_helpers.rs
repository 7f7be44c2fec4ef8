//! Test helpers.

use std::{path::PathBuf, sync::Arc};

use jiff::civil::{Date, date};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use till_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        employees::{MockEmployeesService, records::EmployeeRecord},
        expenses::{MockExpensesService, records::ExpenseRecord},
        items::{MockItemsService, records::ItemRecord},
        sales::{MockSalesService, records::SaleRecord},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_TOKEN_UUID: Uuid = Uuid::nil();

pub(crate) const TEST_DATE: Date = date(2024, 6, 3);

/// Service mocks backing a test [`AppContext`]. Any call without a matching expectation fails.
#[derive(Default)]
pub(crate) struct Mocks {
    pub items: MockItemsService,
    pub sales: MockSalesService,
    pub expenses: MockExpensesService,
    pub employees: MockEmployeesService,
    pub auth: MockAuthService,
}

impl Mocks {
    fn into_app(self) -> AppContext {
        AppContext {
            items: Arc::new(self.items),
            sales: Arc::new(self.sales),
            expenses: Arc::new(self.expenses),
            employees: Arc::new(self.employees),
            auth: Arc::new(self.auth),
        }
    }
}

pub(crate) fn test_assets_dir() -> PathBuf {
    std::env::temp_dir().join("till-json-tests")
}

#[salvo::handler]
pub(crate) async fn inject_token(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_api_token_uuid(TEST_TOKEN_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn state(mocks: Mocks) -> Arc<State> {
    State::shared(mocks.into_app(), test_assets_dir())
}

/// Mounts `route` behind injected state, without the auth middleware.
pub(crate) fn test_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(mocks)))
            .hoop(inject_token)
            .push(route),
    )
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    test_service(
        Mocks {
            items,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn sales_service(sales: MockSalesService, route: Router) -> Service {
    test_service(
        Mocks {
            sales,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn expenses_service(expenses: MockExpensesService, route: Router) -> Service {
    test_service(
        Mocks {
            expenses,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn employees_service(employees: MockEmployeesService, route: Router) -> Service {
    test_service(
        Mocks {
            employees,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn make_item(id: i64, name: &str, price_minor: i64, amount: u32) -> ItemRecord {
    ItemRecord {
        id: id.into(),
        name: name.to_string(),
        price: Decimal::new(price_minor, 2),
        amount,
        image: String::new(),
    }
}

pub(crate) fn make_sale(id: i64, sales_name: &str, amount: u32, price_minor: i64) -> SaleRecord {
    let price = Decimal::new(price_minor, 2);

    SaleRecord {
        id: id.into(),
        batch_uuid: None,
        transaction_name: format!("POS Sale - {TEST_DATE}"),
        sales_name: sales_name.to_string(),
        amount,
        price,
        transaction_date: TEST_DATE,
        total_sales: price * Decimal::from(amount),
    }
}

pub(crate) fn make_expense(id: i64, expense_name: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: id.into(),
        transaction_name: "Restock".to_string(),
        expense_name: expense_name.to_string(),
        amount: 3,
        price: Decimal::new(12000, 2),
        transaction_date: TEST_DATE,
        total_expenses: Decimal::new(36000, 2),
    }
}

pub(crate) fn make_employee(id: i64, first_name: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: id.into(),
        first_name: first_name.to_string(),
        last_name: "Santos".to_string(),
        position: "Cashier".to_string(),
        phone_number: "09171234567".to_string(),
    }
}
