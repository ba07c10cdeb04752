//! Repository trait 定义

use async_trait::async_trait;
use catalog_domain_core::Entity;
use catalog_errors::AppResult;

/// 按 ID 读取时的缓存策略
///
/// 仓储实现可以在读取路径上叠加实体缓存；调用方通过该参数选择是否使用。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// 使用仓储的默认缓存
    #[default]
    Default,
    /// 绕过缓存，直接读取存储
    Bypass,
}

/// 基础 Repository trait
///
/// 所有方法都可能以存储层错误失败，调用方应原样向上传播。
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity + Send + Sync + 'static,
{
    /// 根据 ID 查找，不存在时返回 `None`
    async fn get_by_id(&self, id: T::Id, cache: CachePolicy) -> AppResult<Option<T>>;

    /// 插入新实体，返回携带新分配标识的实体
    async fn insert(&self, entity: T) -> AppResult<T>;

    /// 按标识更新实体，记录不存在时返回 `NotFound`
    async fn update(&self, entity: &T) -> AppResult<()>;

    /// 按标识删除实体
    async fn delete(&self, entity: &T) -> AppResult<()>;
}
