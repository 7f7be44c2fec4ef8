//! Till Domain Concerns

pub mod employees;
pub mod expenses;
pub mod items;
pub mod periods;
pub mod sales;
