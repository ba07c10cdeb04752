//! 视频目录服务

use std::sync::Arc;

use catalog_errors::{AppError, AppResult};
use catalog_ports::{CachePolicy, Repository};
use tracing::{debug, info, instrument};

use crate::domain::entities::Video;
use crate::domain::query::ProductVideoQuery;
use crate::domain::repositories::VideoRepository;
use crate::domain::value_objects::{ProductId, VideoId};
use crate::infrastructure::observability::metrics::{record_operation, record_videos_returned};

/// 视频目录服务
///
/// 无状态门面：不持有缓存、不开启事务，也不重试或转换存储层错误。
#[derive(Clone)]
pub struct VideoCatalogService {
    video_repo: Arc<dyn VideoRepository>,
}

impl VideoCatalogService {
    pub fn new(video_repo: Arc<dyn VideoRepository>) -> Self {
        Self { video_repo }
    }

    /// 根据 ID 获取视频，绕过实体缓存
    ///
    /// 不存在时返回 `Ok(None)`。
    #[instrument(skip(self))]
    pub async fn get_video_by_id(&self, video_id: VideoId) -> AppResult<Option<Video>> {
        let result = self
            .video_repo
            .get_by_id(video_id, CachePolicy::Bypass)
            .await;

        record_operation("get_video_by_id", result.is_ok());
        result
    }

    /// 获取商品的视频，按展示顺序排列
    ///
    /// `records_to_return` 大于 0 时只返回排序后的前 N 条，否则返回全部。
    /// 商品 ID 为 0 时直接返回空列表，不发起查询。
    #[instrument(skip(self))]
    pub async fn get_videos_by_product(
        &self,
        product_id: ProductId,
        records_to_return: i32,
    ) -> AppResult<Vec<Video>> {
        if product_id.is_unset() {
            debug!("Product id is unset, skipping query");
            return Ok(Vec::new());
        }

        let query = ProductVideoQuery::for_product(product_id)
            .take(usize::try_from(records_to_return).unwrap_or(0));

        let result = self.video_repo.find_by_product(&query).await;
        record_operation("get_videos_by_product", result.is_ok());

        let videos = result?;
        record_videos_returned(videos.len());
        debug!(count = videos.len(), "Product videos loaded");

        Ok(videos)
    }

    /// 插入视频，返回携带新标识的视频
    #[instrument(skip(self, video), fields(video_url = %video.video_url))]
    pub async fn insert_video(&self, video: Video) -> AppResult<Video> {
        let result = self.video_repo.insert(video).await;
        record_operation("insert_video", result.is_ok());

        let video = result?;
        info!(video_id = %video.id, "Video inserted");
        Ok(video)
    }

    /// 更新视频
    #[instrument(skip(self, video), fields(video_id = %video.id))]
    pub async fn update_video(&self, video: &Video) -> AppResult<()> {
        let result = self.video_repo.update(video).await;
        record_operation("update_video", result.is_ok());

        result?;
        info!("Video updated");
        Ok(())
    }

    /// 删除视频
    ///
    /// `video` 为 `None` 时立即返回 `InvalidArgument`，不访问仓储。
    #[instrument(skip(self, video))]
    pub async fn delete_video(&self, video: Option<&Video>) -> AppResult<()> {
        let Some(video) = video else {
            record_operation("delete_video", false);
            return Err(AppError::invalid_argument("video must not be empty"));
        };

        let result = self.video_repo.delete(video).await;
        record_operation("delete_video", result.is_ok());

        result?;
        info!(video_id = %video.id, "Video deleted");
        Ok(())
    }
}
