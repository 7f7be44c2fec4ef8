//! Expense Handlers

pub(crate) mod create;
pub(crate) mod daily;
pub(crate) mod index;
