pub mod config;
pub mod ingredients;
pub mod records;
