//! 强类型 ID 定义
//!
//! 标识均为存储层自增整数，`0` 表示尚未分配。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 视频 ID
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
)]
#[display("{_0}")]
pub struct VideoId(pub i32);

impl VideoId {
    pub const UNSET: Self = Self(0);

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

/// 商品 ID
///
/// 商品由目录服务管理，这里只作为外部引用。
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
)]
#[display("{_0}")]
pub struct ProductId(pub i32);

impl ProductId {
    pub const UNSET: Self = Self(0);

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

/// 商品-视频关联 ID
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
)]
#[display("{_0}")]
pub struct ProductVideoMappingId(pub i32);

impl ProductVideoMappingId {
    pub const UNSET: Self = Self(0);

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}
