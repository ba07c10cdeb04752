//! 数据库行映射结构

use sqlx::FromRow;

use crate::domain::entities::{ProductVideoMapping, Video};
use crate::domain::value_objects::{ProductId, ProductVideoMappingId, VideoId};

/// 视频数据库行
#[derive(Debug, FromRow)]
pub struct VideoRow {
    pub id: i32,
    pub video_url: String,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Self {
            id: VideoId(row.id),
            video_url: row.video_url,
        }
    }
}

/// 商品-视频关联数据库行
#[derive(Debug, FromRow)]
pub struct ProductVideoMappingRow {
    pub id: i32,
    pub product_id: i32,
    pub video_id: i32,
    pub display_order: i32,
}

impl From<ProductVideoMappingRow> for ProductVideoMapping {
    fn from(row: ProductVideoMappingRow) -> Self {
        Self {
            id: ProductVideoMappingId(row.id),
            product_id: ProductId(row.product_id),
            video_id: VideoId(row.video_id),
            display_order: row.display_order,
        }
    }
}
