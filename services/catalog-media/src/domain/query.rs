//! 商品视频查询
//!
//! 查询管道固定为：按商品过滤 → 与视频内连接 → 按 `(display_order, id)` 排序 → 可选截取。
//! 截取始终发生在排序之后。

use crate::domain::entities::{ProductVideoMapping, Video};
use crate::domain::value_objects::{ProductId, VideoId};

/// 商品视频查询
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductVideoQuery {
    product_id: ProductId,
    limit: Option<usize>,
}

impl ProductVideoQuery {
    /// 查询商品下的全部视频
    pub fn for_product(product_id: ProductId) -> Self {
        Self {
            product_id,
            limit: None,
        }
    }

    /// 只返回排序后的前 `count` 条，`0` 表示不限制
    pub fn take(mut self, count: usize) -> Self {
        self.limit = (count > 0).then_some(count);
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// 在内存数据上执行查询
    ///
    /// 引用了不存在视频的关联会被内连接丢弃。
    pub fn evaluate<'a, M, F>(&self, mappings: M, video_lookup: F) -> Vec<Video>
    where
        M: IntoIterator<Item = &'a ProductVideoMapping>,
        F: Fn(VideoId) -> Option<&'a Video>,
    {
        let mut joined: Vec<(&ProductVideoMapping, &Video)> = mappings
            .into_iter()
            .filter(|m| m.product_id == self.product_id)
            .filter_map(|m| video_lookup(m.video_id).map(|v| (m, v)))
            .collect();

        joined.sort_by_key(|(m, _)| m.sort_key());

        joined
            .into_iter()
            .take(self.limit.unwrap_or(usize::MAX))
            .map(|(_, v)| v.clone())
            .collect()
    }
}
