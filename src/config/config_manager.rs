use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::bidding::id::{IdGenerator, UniqIdGenerator, UuidIdGenerator};
use crate::logging::logger::LogSettings;
use crate::model::adapters::FileInputSource;

/// 响应 ID 的生成方式
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStrategy {
    /// 13 位十六进制时间戳 ID
    Uniqid,
    /// 随机 UUID v4
    Uuid,
}

#[derive(Parser, Debug)]
#[command(author = "whiteCcinn", version = "1.0", about = "Evaluate one RTB banner bid request against a campaign set")]
pub struct CliArgs {
    /// bid request JSON 文件
    #[arg(short, long, default_value = "bidrequestJson.json")]
    pub bid_request: PathBuf,
    /// campaign 数组 JSON 文件
    #[arg(short, long, default_value = "campaignJson.json")]
    pub campaigns: PathBuf,
    /// 日志目录，不设置时日志写到 stderr
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = IdStrategy::Uniqid)]
    pub id_strategy: IdStrategy,
    /// 格式化输出结果
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Clone, Debug)]
pub struct ConfigManager {
    pub bid_request_path: PathBuf,
    pub campaigns_path: PathBuf,
    pub log: LogSettings,
    pub id_strategy: IdStrategy,
    pub pretty: bool,
}

impl ConfigManager {
    pub fn from_args(args: CliArgs) -> Self {
        ConfigManager {
            bid_request_path: args.bid_request,
            campaigns_path: args.campaigns,
            log: LogSettings {
                log_dir: args.log_dir,
                ..LogSettings::default()
            },
            id_strategy: args.id_strategy,
            pretty: args.pretty,
        }
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Uniqid => Box::new(UniqIdGenerator),
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
        }
    }

    pub fn input_source(&self) -> FileInputSource {
        FileInputSource::new(&self.bid_request_path, &self.campaigns_path)
    }
}
