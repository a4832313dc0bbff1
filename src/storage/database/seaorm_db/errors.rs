use crate::utils::error::AdminError;
use sea_orm::{DbErr, SqlErr};

/// Map a failed write to the error taxonomy
///
/// Unique violations are duplicate names or emails; foreign key violations
/// mean a concurrent writer changed the rows this write references.
pub(super) fn classify_write_error(err: DbErr, what: &str) -> AdminError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            AdminError::validation(format!("{} is already taken ({})", what, detail))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            AdminError::conflict(format!("{} is still referenced ({})", what, detail))
        }
        _ => AdminError::Database(err),
    }
}
