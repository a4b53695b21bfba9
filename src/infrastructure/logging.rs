//! 日志系统配置模块
//! 支持结构化日志、日志级别配置和按天轮转的文件日志

use std::path::Path;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling,
};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    registry::LookupSpan,
    EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 启用文件日志时返回 `WorkerGuard`，调用方需持有到进程退出，否则缓冲中的日志会丢失
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    // 设置日志级别过滤器
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let json = config.format == "json";

    if !config.enable_file_logging {
        Registry::default()
            .with(filter)
            .with(stdout_layer(json))
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    // 文件日志 + 控制台日志
    let log_dir = config
        .log_file_path
        .as_deref()
        .and_then(|p| Path::new(p).parent())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("./logs"));

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let file_appender = rolling::daily(log_dir, "ewallgen.log");
    let (non_blocking_appender, guard) = non_blocking(file_appender);

    Registry::default()
        .with(filter)
        .with(file_layer(json, non_blocking_appender))
        .with(stdout_layer(json))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(guard))
}

/// 控制台日志层
fn stdout_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .boxed()
    } else {
        fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true)
            .boxed()
    }
}

/// 文件日志层
fn file_layer<S>(json: bool, writer: NonBlocking) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(ChronoUtc::rfc_3339())
            .boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false)
            .boxed()
    }
}
