//! 视频目录 Metrics
//!
//! 业务指标记录

use metrics::counter;

/// 记录一次视频服务操作
pub fn record_operation(operation: &'static str, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("success", success.to_string()),
    ];

    counter!("catalog_video_operations_total", &labels).increment(1);
}

/// 记录按商品查询返回的视频数量
pub fn record_videos_returned(count: usize) {
    counter!("catalog_product_videos_returned_total").increment(count as u64);
}
