//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        employees::{EmployeesService, PgEmployeesService},
        expenses::{ExpensesService, PgExpensesService},
        items::{ItemsService, PgItemsService},
        sales::{PgSalesService, SalesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub items: Arc<dyn ItemsService>,
    pub sales: Arc<dyn SalesService>,
    pub expenses: Arc<dyn ExpensesService>,
    pub employees: Arc<dyn EmployeesService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            items: Arc::new(PgItemsService::new(db.clone())),
            sales: Arc::new(PgSalesService::new(db.clone())),
            expenses: Arc::new(PgExpensesService::new(db.clone())),
            employees: Arc::new(PgEmployeesService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
