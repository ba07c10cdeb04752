//! 视频实体

use catalog_domain_core::Entity;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VideoId;

/// 视频实体
///
/// 可播放的媒体引用。除标识外的字段对本服务不透明，原样持久化和返回。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    /// 视频源 URL 或嵌入代码
    pub video_url: String,
}

impl Video {
    /// 创建尚未持久化的视频
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            id: VideoId::UNSET,
            video_url: video_url.into(),
        }
    }
}

impl Entity for Video {
    type Id = VideoId;

    fn id(&self) -> VideoId {
        self.id
    }

    fn set_id(&mut self, id: VideoId) {
        self.id = id;
    }

    fn is_transient(&self) -> bool {
        self.id.is_unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_video_is_transient() {
        let video = Video::new("https://www.youtube.com/embed/abc");
        assert!(video.is_transient());
        assert_eq!(video.id(), VideoId::UNSET);
    }

    #[test]
    fn test_embed_markup_survives_serialization() {
        let markup = r#"<iframe src="https://player.example/1" allowfullscreen></iframe>"#;
        let video = Video {
            id: VideoId(3),
            video_url: markup.to_string(),
        };

        let json = serde_json::to_string(&video).unwrap();
        let back: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(back, video);
    }
}
