use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};

use crate::config::DatabaseConfig;

pub async fn init_db(config: &DatabaseConfig) -> MySqlPool {
    let ssl_mode = if config.tls_enabled {
        MySqlSslMode::Required
    } else {
        MySqlSslMode::Preferred
    };

    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(ssl_mode);

    MySqlPoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database")
}
