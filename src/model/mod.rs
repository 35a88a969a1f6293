pub mod builder;
pub mod page_model;
