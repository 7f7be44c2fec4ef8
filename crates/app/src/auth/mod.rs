//! API bearer tokens: issuance, revocation and request authentication.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::AuthServiceError;
pub use models::{ApiTokenMetadata, IssuedApiToken};
pub use service::{AuthService, MockAuthService, PgAuthService};
pub use token::{API_TOKEN_PREFIX, generate_api_token, hash_api_token};
