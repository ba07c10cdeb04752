//! 实体基础 trait

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 实体 trait
///
/// 标识由存储层分配；未持久化的实体 `is_transient()` 返回 true。
pub trait Entity {
    type Id: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    /// 写入存储层分配的标识
    fn set_id(&mut self, id: Self::Id);

    fn is_transient(&self) -> bool;
}
