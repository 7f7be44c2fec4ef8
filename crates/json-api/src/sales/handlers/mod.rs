//! Sale Handlers

pub(crate) mod batch;
pub(crate) mod create;
pub(crate) mod daily;
pub(crate) mod index;
