//! Items

mod errors;
pub(crate) mod handlers;
mod models;
mod uploads;

pub(crate) use handlers::*;
