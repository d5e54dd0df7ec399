use std::io;
use std::path::PathBuf;

use tracing::subscriber::SetGlobalDefaultError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// 日志输出配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// 设置后按小时滚动写入该目录，否则写到 stderr（stdout 留给竞价结果）
    pub log_dir: Option<PathBuf>,
    pub file_name: String,
    /// 没有设置 RUST_LOG 时使用的过滤规则
    pub default_directive: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            log_dir: None,
            file_name: "bidder_log.json".to_string(),
            default_directive: "info".to_string(),
        }
    }
}

/// RUST_LOG 优先，解析失败或未设置时退回默认规则
pub fn build_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.default_directive))
}

/// 初始化全局 tracing 日志，返回的 guard 必须一直持有到进程退出，否则缓冲日志会丢失
pub fn init(settings: &LogSettings) -> Result<WorkerGuard, SetGlobalDefaultError> {
    let (non_blocking, guard) = match &settings.log_dir {
        Some(dir) => tracing_appender::non_blocking(rolling::hourly(dir, &settings.file_name)),
        None => tracing_appender::non_blocking(io::stderr()),
    };

    let subscriber = Registry::default()
        .with(build_filter(settings))
        .with(fmt::layer().json().with_writer(non_blocking));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}
