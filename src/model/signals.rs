// src/model/signals.rs

use crate::openrtb::request::BannerFormat;

/// 从 BidRequest 中提取出的定向信号，只在一次竞价中使用
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSignals {
    /// 底价，非负
    pub bid_floor: f64,
    /// 设备操作系统，已转小写
    pub device_os: String,
    /// 国家代码，保持原始大小写，匹配时忽略大小写
    pub country: String,
    pub banner_formats: Vec<BannerFormat>,
}
