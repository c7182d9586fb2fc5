use crate::domain::errors::DomainError;

const SLUG_CONSTRAINT_SUFFIX: &str = "_slug_key";
const CNT_TOOL_CATEGORY_FK: &str = "tool_categories_category_id_fkey";
const CNT_TOOL_ALTERNATIVE_FK: &str = "tool_alternatives_alternative_id_fkey";
const CNT_TOOL_STATUS_CHECK: &str = "tools_status_chk";

/// A stored row that no longer decodes into the domain type. This is a fault
/// in the store, never in the caller's input.
pub fn corrupt_row(table: &str, err: DomainError) -> DomainError {
    DomainError::Persistence(format!("unreadable {table} row: {err}"))
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if constraint.ends_with(SLUG_CONSTRAINT_SUFFIX) {
                    return DomainError::DuplicateSlug(format!("{constraint} violated"));
                }
                return match constraint {
                    CNT_TOOL_CATEGORY_FK => DomainError::NotFound("category not found".into()),
                    CNT_TOOL_ALTERNATIVE_FK => {
                        DomainError::NotFound("alternative not found".into())
                    }
                    CNT_TOOL_STATUS_CHECK => DomainError::Validation("unknown tool status".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    // serialization_failure, admin/crash shutdown, cannot_connect_now
                    "40001" | "57P01" | "57P02" | "57P03" => {
                        return DomainError::Unavailable(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => DomainError::Unavailable(err.to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
