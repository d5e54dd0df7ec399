use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bidding::builder::ResponseBuilder;
use crate::bidding::error::BidError;
use crate::bidding::extractor;
use crate::bidding::id::{IdGenerator, UniqIdGenerator};
use crate::bidding::matcher;
use crate::logging::bid_log::BidLog;
use crate::model::campaign::Campaign;
use crate::openrtb::request::BidRequest;
use crate::openrtb::response::{BannerResponse, BidOutcome, ErrorResponse};

/// pipeline 的阶段：Extracting → Matching → Building → Done，
/// Extracting 和 Matching 可以进入 Failed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Extracting,
    Matching,
    Building,
    Done,
    Failed,
}

/// 单次竞价的编排：提取信号、匹配 campaign、构建响应
///
/// 可恢复的错误在这里被记录并转换成 `ErrorResponse`，不会向外抛出。
pub struct BidPipeline<G = UniqIdGenerator> {
    builder: ResponseBuilder<G>,
}

impl Default for BidPipeline<UniqIdGenerator> {
    fn default() -> Self {
        Self::new(UniqIdGenerator)
    }
}

impl<G: IdGenerator> BidPipeline<G> {
    pub fn new(ids: G) -> Self {
        Self {
            builder: ResponseBuilder::new(ids),
        }
    }

    /// 处理竞价请求，并把竞价日志写入 tracing
    pub fn handle(&self, bid_request: &BidRequest, campaigns: &[Campaign]) -> BidOutcome {
        let (outcome, log) = self.handle_with_log(bid_request, campaigns);
        log.emit();
        outcome
    }

    /// 处理竞价请求，同时返回本次的竞价日志（不输出）
    pub fn handle_with_log(&self, bid_request: &BidRequest, campaigns: &[Campaign]) -> (BidOutcome, BidLog) {
        let request_id = bid_request.request_id();
        let mut log = BidLog::new(request_id.as_deref(), campaigns.len());

        let outcome = match self.run(bid_request, campaigns, &mut log) {
            Ok(response) => BidOutcome::Bid(response),
            Err(err) => {
                warn!(
                    request_id = request_id.as_deref().unwrap_or(""),
                    stage = ?log.stage,
                    error = ?err,
                    "{}", err
                );
                let message = err.to_string();
                log.set_failure(&message);
                BidOutcome::NoBid(ErrorResponse::new(message))
            }
        };

        (outcome, log)
    }

    fn run(&self, bid_request: &BidRequest, campaigns: &[Campaign], log: &mut BidLog) -> Result<BannerResponse, BidError> {
        log.enter(PipelineStage::Extracting);
        let signals = extractor::extract(bid_request)?;
        log.record_signals(&signals);
        debug!(
            bid_floor = signals.bid_floor,
            device_os = %signals.device_os,
            country = %signals.country,
            "bid request signals extracted"
        );

        log.enter(PipelineStage::Matching);
        let candidates = matcher::eligible(&signals, campaigns);
        log.eligible_campaigns = candidates.len();
        let selected = matcher::pick_highest(candidates)?;
        debug!(price = selected.price_as_f64(), eligible = log.eligible_campaigns, "campaign selected");

        log.enter(PipelineStage::Building);
        let response = self.builder.build(selected);
        log.set_winner(selected);

        log.enter(PipelineStage::Done);
        Ok(response)
    }
}

/// 持有一次竞价的全部输入：解析后的 bid request、campaign 集合和 pipeline
pub struct RtbBannerBidder<G = UniqIdGenerator> {
    bid_request: BidRequest,
    campaigns: Vec<Campaign>,
    pipeline: BidPipeline<G>,
}

impl RtbBannerBidder<UniqIdGenerator> {
    pub fn from_json(bid_request_json: &str, campaigns_json: &str) -> Result<Self, BidError> {
        Self::from_json_with(bid_request_json, campaigns_json, UniqIdGenerator)
    }
}

impl<G: IdGenerator> RtbBannerBidder<G> {
    /// 解析两份输入 JSON；格式错误直接返回 `InvalidInputFormat`，不会变成错误响应
    pub fn from_json_with(bid_request_json: &str, campaigns_json: &str, ids: G) -> Result<Self, BidError> {
        let bid_request = decode::<BidRequest>(bid_request_json)?;
        let campaigns = decode::<Vec<Campaign>>(campaigns_json)?;
        Ok(Self::new(bid_request, campaigns, ids))
    }

    pub fn new(bid_request: BidRequest, campaigns: Vec<Campaign>, ids: G) -> Self {
        Self {
            bid_request,
            campaigns,
            pipeline: BidPipeline::new(ids),
        }
    }

    pub fn bid_request(&self) -> &BidRequest {
        &self.bid_request
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn handle_bid_request(&self) -> BidOutcome {
        self.pipeline.handle(&self.bid_request, &self.campaigns)
    }

    /// 处理请求并序列化结果；序列化失败属于致命错误，向上返回
    pub fn handle_bid_request_json(&self) -> Result<String, BidError> {
        render(&self.handle_bid_request(), false)
    }
}

/// 输出 JSON，`pretty` 为 true 时带缩进
pub fn render(outcome: &BidOutcome, pretty: bool) -> Result<String, BidError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(outcome)
    } else {
        serde_json::to_string(outcome)
    };
    rendered.map_err(BidError::OutputSerialization)
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, BidError> {
    let mut bytes = json.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut bytes).map_err(BidError::InvalidInputFormat)
}
