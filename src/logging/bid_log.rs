use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bidding::engine::PipelineStage;
use crate::model::campaign::Campaign;
use crate::model::signals::ExtractedSignals;

/// **单次竞价日志**，每次调用 pipeline 输出一行 JSON
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BidLog {
    pub timestamp: String,              // 记录时间
    pub log_type: String,               // 固定为 "rtb_banner_bid"
    pub request_id: Option<String>,     // BidRequest.id
    pub status: String,                 // "success" or "failure"
    pub stage: PipelineStage,           // 结束时所处阶段
    pub failed_stage: Option<PipelineStage>,
    pub bid_floor: Option<f64>,
    pub device_os: Option<String>,
    pub country: Option<String>,
    pub candidate_campaigns: usize,     // 输入的 campaign 数量
    pub eligible_campaigns: usize,      // 通过定向过滤的数量
    pub winning_campaign: Option<String>,
    pub winning_price: Option<f64>,
    pub error: Option<String>,
}

impl BidLog {
    /// **创建竞价日志**，初始阶段为 Extracting
    pub fn new(request_id: Option<&str>, candidate_campaigns: usize) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            log_type: "rtb_banner_bid".to_string(),
            request_id: request_id.map(str::to_string),
            status: "failure".to_string(), // 默认失败，成功后更新
            stage: PipelineStage::Extracting,
            failed_stage: None,
            bid_floor: None,
            device_os: None,
            country: None,
            candidate_campaigns,
            eligible_campaigns: 0,
            winning_campaign: None,
            winning_price: None,
            error: None,
        }
    }

    pub fn enter(&mut self, stage: PipelineStage) {
        self.stage = stage;
    }

    pub fn record_signals(&mut self, signals: &ExtractedSignals) {
        self.bid_floor = Some(signals.bid_floor);
        self.device_os = Some(signals.device_os.clone());
        self.country = Some(signals.country.clone());
    }

    /// **设置中标 campaign**
    pub fn set_winner(&mut self, campaign: &Campaign) {
        self.status = "success".to_string();
        self.winning_campaign = campaign.display_name();
        self.winning_price = Some(campaign.price_as_f64());
    }

    /// **记录失败**：当前阶段转为 Failed
    pub fn set_failure(&mut self, message: &str) {
        self.status = "failure".to_string();
        self.failed_stage = Some(self.stage);
        self.stage = PipelineStage::Failed;
        self.error = Some(message.to_string());
    }

    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(line) => info!(target: "bid_log", "{}", line),
            Err(e) => warn!(target: "bid_log", error = %e, "failed to encode bid log"),
        }
    }
}
