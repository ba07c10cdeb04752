//! 视频仓储接口

use async_trait::async_trait;
use catalog_errors::AppResult;
use catalog_ports::Repository;

use crate::domain::entities::Video;
use crate::domain::query::ProductVideoQuery;

/// 视频仓储接口
#[async_trait]
pub trait VideoRepository: Repository<Video> {
    /// 按商品查询视频，结果按 `(display_order, mapping id)` 排序
    async fn find_by_product(&self, query: &ProductVideoQuery) -> AppResult<Vec<Video>>;
}
