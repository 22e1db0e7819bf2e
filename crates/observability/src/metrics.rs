//! 通知分发指标
//!
//! 未安装 recorder 时所有调用都是空操作。

use metrics::{counter, histogram};

/// 投递失败类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 网络错误
    Network,
    /// 服务器返回非 2xx
    Status,
    /// 无异步运行时
    Runtime,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Status => "status",
            FailureKind::Runtime => "runtime",
        }
    }
}

/// 记录已发出的通知请求 (尚未完成)
pub fn record_notification_dispatched(transport: &str) {
    counter!(
        "p3_ntfy_notifications_dispatched_total",
        "transport" => transport.to_string()
    )
    .increment(1);
}

/// 记录投递成功及耗时
pub fn record_notification_delivered(latency_ms: f64) {
    counter!("p3_ntfy_notifications_published_total").increment(1);
    histogram!("p3_ntfy_delivery_latency_ms").record(latency_ms);
}

/// 记录投递失败
pub fn record_notification_failed(kind: FailureKind) {
    counter!(
        "p3_ntfy_notifications_failed_total",
        "kind" => kind.as_str()
    )
    .increment(1);
}

/// 记录因配置缺失而被拒绝的发布
pub fn record_notification_rejected() {
    counter!("p3_ntfy_notifications_rejected_total").increment(1);
}
