use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    folio_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Counts rows in a table, bypassing the repositories
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    // Use sqlx::query_scalar (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
