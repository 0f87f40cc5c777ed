pub mod catalog;
pub mod screening;
