//! Tests for the demo-data seed routine.

use sqlx::PgPool;

async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    n
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_populates_every_table(pool: PgPool) {
    motordesk_db::seed::run(&pool).await.unwrap();

    assert_eq!(count(&pool, "users").await, 4);
    assert_eq!(count(&pool, "clients").await, 5);
    assert_eq!(count(&pool, "vehicles").await, 6);
    assert_eq!(count(&pool, "email_cases").await, 4);
    assert_eq!(count(&pool, "waitlist_requests").await, 3);
    assert_eq!(count(&pool, "knowledge_items").await, 16);
    assert_eq!(count(&pool, "daily_stats").await, 7);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_repeatable(pool: PgPool) {
    motordesk_db::seed::run(&pool).await.unwrap();
    // A second run wipes and reloads instead of violating uniqueness.
    motordesk_db::seed::run(&pool).await.unwrap();

    assert_eq!(count(&pool, "users").await, 4);
    assert_eq!(count(&pool, "vehicles").await, 6);
}
