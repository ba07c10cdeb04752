//! 实体模块

mod product_video_mapping;
mod video;

pub use product_video_mapping::ProductVideoMapping;
pub use video::Video;
