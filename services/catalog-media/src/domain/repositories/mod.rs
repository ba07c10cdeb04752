//! 仓储接口模块

mod video_repository;

pub use video_repository::VideoRepository;
