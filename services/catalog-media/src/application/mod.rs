//! 应用层

mod video_service;

pub use video_service::VideoCatalogService;
