//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use uuid::Uuid;

const API_TOKEN_DEPOT_KEY: &str = "api_token_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_api_token_uuid(&mut self, token: Uuid);

    /// The authenticated token, set by the auth middleware.
    fn api_token_uuid_or_401(&self) -> Result<Uuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_api_token_uuid(&mut self, token: Uuid) {
        self.insert(API_TOKEN_DEPOT_KEY, token);
    }

    fn api_token_uuid_or_401(&self) -> Result<Uuid, StatusError> {
        self.get::<Uuid>(API_TOKEN_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}
