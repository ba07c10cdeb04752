//! 商品-视频关联实体

use catalog_domain_core::Entity;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductId, ProductVideoMappingId, VideoId};

/// 商品-视频关联
///
/// 同一商品下按 `(display_order, id)` 升序即为视频的展示顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVideoMapping {
    pub id: ProductVideoMappingId,
    pub product_id: ProductId,
    pub video_id: VideoId,
    pub display_order: i32,
}

impl ProductVideoMapping {
    pub fn new(product_id: ProductId, video_id: VideoId, display_order: i32) -> Self {
        Self {
            id: ProductVideoMappingId::UNSET,
            product_id,
            video_id,
            display_order,
        }
    }

    /// 排序键，`id` 用于 display_order 相同时的稳定排序
    pub fn sort_key(&self) -> (i32, ProductVideoMappingId) {
        (self.display_order, self.id)
    }
}

impl Entity for ProductVideoMapping {
    type Id = ProductVideoMappingId;

    fn id(&self) -> ProductVideoMappingId {
        self.id
    }

    fn set_id(&mut self, id: ProductVideoMappingId) {
        self.id = id;
    }

    fn is_transient(&self) -> bool {
        self.id.is_unset()
    }
}
