//! Seed binary: wipes all tables and loads representative demo data.
//!
//! Usage: `DATABASE_URL=postgres://... cargo run --bin motordesk-seed`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "motordesk_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = motordesk_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    motordesk_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    motordesk_db::seed::run(&pool)
        .await
        .expect("Seeding failed");
}
