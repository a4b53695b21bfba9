//! 时间工具模块

use chrono::{DateTime, Local};

/// 导出文件名使用的本地时间戳：YYYYMMDD_HHMMSS（24 小时制）
pub fn export_timestamp(dt: &DateTime<Local>) -> String {
    dt.format("%Y%m%d_%H%M%S").to_string()
}

/// 格式化持续时间
pub fn format_duration_ms(ms: u128) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{}.{:03}s", ms / 1000, ms % 1000)
    } else {
        let secs = ms / 1000;
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
