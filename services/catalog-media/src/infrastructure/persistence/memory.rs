//! 内存仓储实现
//!
//! 与 PostgreSQL 实现行为一致：自增标识、关联外键校验、删除视频时级联删除关联。

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_domain_core::Entity;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{CachePolicy, Repository};
use tokio::sync::RwLock;

use crate::domain::entities::{ProductVideoMapping, Video};
use crate::domain::query::ProductVideoQuery;
use crate::domain::repositories::VideoRepository;
use crate::domain::value_objects::{ProductVideoMappingId, VideoId};

#[derive(Debug, Default)]
struct CatalogState {
    videos: BTreeMap<VideoId, Video>,
    mappings: BTreeMap<ProductVideoMappingId, ProductVideoMapping>,
    last_video_id: i32,
    last_mapping_id: i32,
}

/// 共享的内存存储，视频仓储和关联仓储都是它的句柄
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    state: Arc<RwLock<CatalogState>>,
    queries: Arc<AtomicUsize>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video_repository(&self) -> InMemoryVideoRepository {
        InMemoryVideoRepository {
            store: self.clone(),
        }
    }

    pub fn mapping_repository(&self) -> InMemoryProductVideoMappingRepository {
        InMemoryProductVideoMappingRepository {
            store: self.clone(),
        }
    }

    /// 已执行的读取次数（按 ID 读取和按商品查询）
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Video
// ============================================================================

#[derive(Debug, Clone)]
pub struct InMemoryVideoRepository {
    store: InMemoryCatalogStore,
}

#[async_trait]
impl Repository<Video> for InMemoryVideoRepository {
    async fn get_by_id(&self, id: VideoId, _cache: CachePolicy) -> AppResult<Option<Video>> {
        self.store.record_query();
        let state = self.store.state.read().await;
        Ok(state.videos.get(&id).cloned())
    }

    async fn insert(&self, mut video: Video) -> AppResult<Video> {
        let mut state = self.store.state.write().await;
        state.last_video_id += 1;
        video.set_id(VideoId(state.last_video_id));
        state.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn update(&self, video: &Video) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        match state.videos.get_mut(&video.id) {
            Some(existing) => {
                *existing = video.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!("video {}", video.id))),
        }
    }

    async fn delete(&self, video: &Video) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        if state.videos.remove(&video.id).is_some() {
            state.mappings.retain(|_, m| m.video_id != video.id);
        }
        Ok(())
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_by_product(&self, query: &ProductVideoQuery) -> AppResult<Vec<Video>> {
        self.store.record_query();
        let state = self.store.state.read().await;
        Ok(query.evaluate(state.mappings.values(), |id| state.videos.get(&id)))
    }
}

// ============================================================================
// ProductVideoMapping
// ============================================================================

#[derive(Debug, Clone)]
pub struct InMemoryProductVideoMappingRepository {
    store: InMemoryCatalogStore,
}

fn ensure_video_exists(state: &CatalogState, video_id: VideoId) -> AppResult<()> {
    if state.videos.contains_key(&video_id) {
        Ok(())
    } else {
        Err(AppError::conflict(format!(
            "product video mapping references missing video {}",
            video_id
        )))
    }
}

#[async_trait]
impl Repository<ProductVideoMapping> for InMemoryProductVideoMappingRepository {
    async fn get_by_id(
        &self,
        id: ProductVideoMappingId,
        _cache: CachePolicy,
    ) -> AppResult<Option<ProductVideoMapping>> {
        self.store.record_query();
        let state = self.store.state.read().await;
        Ok(state.mappings.get(&id).cloned())
    }

    async fn insert(&self, mut mapping: ProductVideoMapping) -> AppResult<ProductVideoMapping> {
        let mut state = self.store.state.write().await;
        ensure_video_exists(&state, mapping.video_id)?;

        state.last_mapping_id += 1;
        mapping.set_id(ProductVideoMappingId(state.last_mapping_id));
        state.mappings.insert(mapping.id, mapping.clone());
        Ok(mapping)
    }

    async fn update(&self, mapping: &ProductVideoMapping) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        ensure_video_exists(&state, mapping.video_id)?;

        match state.mappings.get_mut(&mapping.id) {
            Some(existing) => {
                *existing = mapping.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "product video mapping {}",
                mapping.id
            ))),
        }
    }

    async fn delete(&self, mapping: &ProductVideoMapping) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        state.mappings.remove(&mapping.id);
        Ok(())
    }
}
