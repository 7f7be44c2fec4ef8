//! Item Handlers

pub(crate) mod create;
pub(crate) mod decrement;
pub(crate) mod delete;
pub(crate) mod increment;
pub(crate) mod index;
pub(crate) mod update;
