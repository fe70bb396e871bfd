//! Administrative utility: remove every user.
//!
//! Outside the request-handling core; has no session or ownership
//! implications. Posts are left orphaned on purpose (the author
//! reference is unenforced at the storage level).

use auth::PgAuthRepository;
use sqlx::postgres::PgPoolOptions;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    let repo = PgAuthRepository::new(pool);
    let deleted = repo.delete_all_users().await?;

    println!("All users removed ({deleted}).");

    Ok(())
}
