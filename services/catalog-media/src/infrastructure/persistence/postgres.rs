//! PostgreSQL repository implementation

use async_trait::async_trait;
use catalog_adapter_postgres::{Migration, map_sqlx_error};
use catalog_domain_core::Entity;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{CachePolicy, Repository};
use sqlx::PgPool;
use tracing::debug;

use crate::domain::entities::{ProductVideoMapping, Video};
use crate::domain::query::ProductVideoQuery;
use crate::domain::repositories::VideoRepository;
use crate::domain::value_objects::{ProductVideoMappingId, VideoId};

use super::rows::{ProductVideoMappingRow, VideoRow};

/// 本服务的 schema 迁移
pub fn migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_video_tables",
        include_str!("../../../migrations/0001_create_video_tables.sql"),
    )]
}

// ============================================================================
// VideoRepository 实现
// ============================================================================

/// 没有实体缓存层，`CachePolicy` 不影响读取
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Video> for PostgresVideoRepository {
    async fn get_by_id(&self, id: VideoId, _cache: CachePolicy) -> AppResult<Option<Video>> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT id, video_url
            FROM video
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("select video", e))?;

        Ok(row.map(Video::from))
    }

    async fn insert(&self, mut video: Video) -> AppResult<Video> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO video (video_url)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(&video.video_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert video", e))?;

        video.set_id(VideoId(id));
        Ok(video)
    }

    async fn update(&self, video: &Video) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE video SET
                video_url = $1
            WHERE id = $2
            "#,
        )
        .bind(&video.video_url)
        .bind(video.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update video", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("video {}", video.id)));
        }

        Ok(())
    }

    async fn delete(&self, video: &Video) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM video WHERE id = $1")
            .bind(video.id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete video", e))?;

        if result.rows_affected() == 0 {
            debug!(video_id = %video.id, "Delete matched no video");
        }

        Ok(())
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn find_by_product(&self, query: &ProductVideoQuery) -> AppResult<Vec<Video>> {
        // LIMIT NULL 表示不限制
        let limit = query.limit().map(|n| i64::try_from(n).unwrap_or(i64::MAX));

        let rows = sqlx::query_as::<_, VideoRow>(
            r#"
            SELECT v.id, v.video_url
            FROM video v
            INNER JOIN product_video_mapping pvm ON v.id = pvm.video_id
            WHERE pvm.product_id = $1
            ORDER BY pvm.display_order ASC, pvm.id ASC
            LIMIT $2
            "#,
        )
        .bind(query.product_id().0)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("select product videos", e))?;

        Ok(rows.into_iter().map(Video::from).collect())
    }
}

// ============================================================================
// ProductVideoMapping Repository 实现
// ============================================================================

pub struct PostgresProductVideoMappingRepository {
    pool: PgPool,
}

impl PostgresProductVideoMappingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<ProductVideoMapping> for PostgresProductVideoMappingRepository {
    async fn get_by_id(
        &self,
        id: ProductVideoMappingId,
        _cache: CachePolicy,
    ) -> AppResult<Option<ProductVideoMapping>> {
        let row = sqlx::query_as::<_, ProductVideoMappingRow>(
            r#"
            SELECT id, product_id, video_id, display_order
            FROM product_video_mapping
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("select product video mapping", e))?;

        Ok(row.map(ProductVideoMapping::from))
    }

    async fn insert(&self, mut mapping: ProductVideoMapping) -> AppResult<ProductVideoMapping> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO product_video_mapping (product_id, video_id, display_order)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(mapping.product_id.0)
        .bind(mapping.video_id.0)
        .bind(mapping.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert product video mapping", e))?;

        mapping.set_id(ProductVideoMappingId(id));
        Ok(mapping)
    }

    async fn update(&self, mapping: &ProductVideoMapping) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE product_video_mapping SET
                product_id = $1,
                video_id = $2,
                display_order = $3
            WHERE id = $4
            "#,
        )
        .bind(mapping.product_id.0)
        .bind(mapping.video_id.0)
        .bind(mapping.display_order)
        .bind(mapping.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update product video mapping", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "product video mapping {}",
                mapping.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, mapping: &ProductVideoMapping) -> AppResult<()> {
        sqlx::query("DELETE FROM product_video_mapping WHERE id = $1")
            .bind(mapping.id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete product video mapping", e))?;

        Ok(())
    }
}
