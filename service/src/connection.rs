use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Opens the store described by `database_url`.
///
/// SQL statements are logged through sqlx at `debug` level. Schema setup is
/// left to the caller, see `migration::Migrator`.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.connect_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    tracing::debug!("connecting to store");
    Database::connect(opt).await
}
