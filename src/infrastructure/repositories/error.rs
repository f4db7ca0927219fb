use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                DomainError::Conflict(format!("unique constraint violated: {}", db_err.message()))
            }
            ErrorKind::ForeignKeyViolation => DomainError::Conflict(
                "referenced record is missing or still referenced".into(),
            ),
            ErrorKind::CheckViolation => {
                DomainError::Validation(format!("check constraint violated: {}", db_err.message()))
            }
            ErrorKind::NotNullViolation => {
                DomainError::Validation(format!("required column missing: {}", db_err.message()))
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
