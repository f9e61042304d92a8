use rowmap::Db;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`. Safe to call from
/// every test; only the first call in a process takes effect.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Opens a fresh in-memory SQLite database.
pub async fn setup_db() -> Db {
    init_logging();
    Db::connect("sqlite::memory:").await.unwrap()
}
