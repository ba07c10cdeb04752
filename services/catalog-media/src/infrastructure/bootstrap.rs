//! 服务装配
//!
//! 配置 → 连接池 → 迁移 → 仓储 → 服务

use std::sync::Arc;

use catalog_adapter_postgres::{MigrationManager, PostgresConfig, check_connection, create_pool};
use catalog_config::{AppConfig, DatabaseConfig};
use catalog_errors::{AppError, AppResult};
use catalog_telemetry::{PrometheusHandle, init_metrics, init_tracing_with};
use secrecy::ExposeSecret;
use tracing::info;

use crate::application::VideoCatalogService;
use crate::infrastructure::persistence::{PostgresVideoRepository, migrations};

/// 初始化日志与 Prometheus recorder，只能调用一次
pub fn init_runtime(config: &AppConfig) -> AppResult<PrometheusHandle> {
    init_tracing_with(&config.telemetry.log_level, config.json_logs());

    let metrics = init_metrics()
        .map_err(|e| AppError::internal(format!("Failed to install metrics recorder: {}", e)))?;

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );

    Ok(metrics)
}

pub fn postgres_config(database: &DatabaseConfig) -> PostgresConfig {
    PostgresConfig::new(database.url.expose_secret().clone())
        .with_pool(database.min_connections, database.max_connections)
        .with_connect_timeout(database.connect_timeout())
}

/// 连接数据库并构建视频目录服务
pub async fn connect(config: &AppConfig) -> AppResult<VideoCatalogService> {
    let pool = create_pool(&postgres_config(&config.database)).await?;
    check_connection(&pool).await?;

    if config.database.run_migrations {
        let result = MigrationManager::new(pool.clone())
            .migrate(&migrations())
            .await?
            .into_result()?;
        info!(
            applied = result.applied.len(),
            skipped = result.skipped.len(),
            "Migrations finished"
        );
    }

    let video_repo = Arc::new(PostgresVideoRepository::new(pool));
    info!("Video catalog service initialized");

    Ok(VideoCatalogService::new(video_repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;
    use std::time::Duration;

    #[test]
    fn test_postgres_config_from_database_config() {
        let database = DatabaseConfig {
            url: Secret::new("postgres://app:secret@db:5432/catalog".to_string()),
            max_connections: 25,
            min_connections: 3,
            connect_timeout_secs: 5,
            run_migrations: false,
        };

        let config = postgres_config(&database);
        assert_eq!(config.url, "postgres://app:secret@db:5432/catalog");
        assert_eq!(config.max_connections, 25);
        assert_eq!(config.min_connections, 3);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
