//! Extension traits

mod depot;
mod month;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use month::MonthQueryExt as _;
pub(crate) use result::ResultExt as _;
