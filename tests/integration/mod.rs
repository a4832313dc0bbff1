//! Integration tests for identity-admin
//!
//! These tests verify the interaction between multiple components
//! against real stores without mocking.

pub mod account_tests;
pub mod config_validation_tests;
pub mod http_tests;
pub mod rbac_tests;
pub mod store_tests;
