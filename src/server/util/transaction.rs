use dioxus_logger::tracing;
use sea_orm::DatabaseTransaction;

use crate::server::error::AppError;

/// Ends a transaction according to the outcome of the work done inside it.
///
/// Commits when `result` is `Ok`. Otherwise rolls back and returns the original error;
/// a failing rollback is logged rather than replacing that error.
///
/// # Arguments
/// - `txn` - The transaction the work ran in
/// - `result` - Outcome of the work
///
/// # Returns
/// - `Ok(T)` - Work succeeded and the transaction committed
/// - `Err(AppError)` - Work failed (transaction rolled back) or the commit failed
pub async fn finish<T>(txn: DatabaseTransaction, result: Result<T, AppError>) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
