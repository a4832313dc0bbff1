//! Validation trait definition

/// Self-check of one configuration section
///
/// The error string names the offending field; `Config::validate` wraps it in
/// `AdminError::Config`.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
