use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// In-memory SQLite database backing a single test.
///
/// `db` is `None` only for a context that was never built; `TestBuilder::build` always
/// fills it.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database and runs `tables` against it in order.
    pub async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in &tables {
            db.execute(stmt).await?;
        }

        Ok(Self { db: Some(db) })
    }
}
