//! Input validation utilities

mod data_validator;

pub use data_validator::DataValidator;
