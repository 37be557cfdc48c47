pub mod density;
pub mod engine;
pub mod format;
pub mod parse;
pub mod registry;
pub mod service;
