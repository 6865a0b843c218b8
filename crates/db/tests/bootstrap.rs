use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    motordesk_db::health_check(&pool).await.unwrap();

    // Verify every table exists (zero rows is fine on a fresh database).
    let tables = [
        "users",
        "clients",
        "email_cases",
        "vehicles",
        "waitlist_requests",
        "knowledge_items",
        "daily_stats",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 >= 0);
    }
}

/// Verify all enum domains were created with their expected labels.
#[sqlx::test(migrations = "./migrations")]
async fn test_enum_domains(pool: PgPool) {
    let cases = [
        ("user_role", vec!["admin", "seller", "readonly"]),
        (
            "email_status",
            vec!["new", "in_progress", "replied", "follow_up"],
        ),
        ("email_priority", vec!["low", "medium", "high"]),
        (
            "waitlist_status",
            vec!["waiting", "contacted", "converted", "inactive"],
        ),
        ("vehicle_status", vec!["available", "reserved", "sold"]),
        (
            "fuel_type",
            vec!["gasoline", "diesel", "hybrid", "electric"],
        ),
        ("transmission", vec!["manual", "automatic"]),
    ];

    for (type_name, expected) in cases {
        let labels: Vec<(String,)> = sqlx::query_as(
            "SELECT enumlabel::text FROM pg_enum
             JOIN pg_type ON pg_type.oid = pg_enum.enumtypid
             WHERE pg_type.typname = $1
             ORDER BY enumsortorder",
        )
        .bind(type_name)
        .fetch_all(&pool)
        .await
        .unwrap();

        let labels: Vec<&str> = labels.iter().map(|(l,)| l.as_str()).collect();
        assert_eq!(labels, expected, "labels mismatch for {type_name}");
    }
}
