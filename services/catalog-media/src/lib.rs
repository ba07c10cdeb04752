//! catalog-media - 商品视频目录服务
//!
//! 按 ID 获取视频、按展示顺序列出商品视频，以及视频的增删改。

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::VideoCatalogService;
