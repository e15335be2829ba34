pub mod database;
pub mod error;
pub mod extract;
pub mod validation;
