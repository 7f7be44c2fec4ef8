//! Bearer token authentication for the API routes.

pub(crate) mod middleware;
