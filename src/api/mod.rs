pub mod employee;
pub mod error;
