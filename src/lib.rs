//! Till
//!
//! Point-of-sale core: a cached inventory ledger, a cart that reserves against it, and a
//! two-phase protocol that commits a sale to a remote backend.

pub mod cart;
pub mod commit;
pub mod items;
pub mod ledger;
pub mod prelude;
pub mod pricing;
pub mod register;
pub mod sales;
