//! sqlx 错误到 AppError 的映射

use catalog_errors::AppError;

/// 将 sqlx 错误转换为 AppError
///
/// 唯一约束、外键约束冲突映射为 `Conflict`，其余统一为 `Database`。
/// `context` 描述失败的操作，例如 "insert video"。
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
            return AppError::conflict(format!("{} failed: {}", context, db_err));
        }
    }

    match err {
        sqlx::Error::RowNotFound => AppError::not_found(format!("{}: row not found", context)),
        other => AppError::database(format!("{} failed: {}", context, other)),
    }
}
