//! Input adapters: flat bill records read from CSV or JSON files.

pub mod csv;
pub mod json;
pub mod record;
