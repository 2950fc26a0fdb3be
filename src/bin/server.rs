use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let path = dotenv::var("DB_PATH").expect("DB_PATH must be set");
    let pool = db::establish_connection(&path).await?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    run_server(pool).await
}
