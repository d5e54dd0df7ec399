use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 竞价成功时返回的 banner 响应
///
/// 除 `id` 和 `bid_price` 外，其余字段原样取自中标 campaign，缺失时序列化为 `null`。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BannerResponse {
    pub id: String,
    pub campaign_name: Option<Value>,
    pub advertiser: Option<Value>,
    pub bid_price: Number,
    pub ad_id: Option<Value>,
    pub creative_id: Option<Value>,
    pub image_url: Option<Value>,
    pub landing_page_url: Option<Value>,
    pub creative_type: Option<Value>,
}

/// 所有失败路径共用的错误响应
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// 一次竞价的最终输出：二者之一，序列化时不带标签
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BidOutcome {
    Bid(BannerResponse),
    NoBid(ErrorResponse),
}

impl BidOutcome {
    pub fn is_bid(&self) -> bool {
        matches!(self, BidOutcome::Bid(_))
    }

    pub fn bid(&self) -> Option<&BannerResponse> {
        match self {
            BidOutcome::Bid(response) => Some(response),
            BidOutcome::NoBid(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BidOutcome::Bid(_) => None,
            BidOutcome::NoBid(err) => Some(&err.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_bid_serializes_as_bare_error_object() {
        let outcome = BidOutcome::NoBid(ErrorResponse::new("No suitable campaign found!"));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "No suitable campaign found!"})
        );
        assert_eq!(outcome.error_message(), Some("No suitable campaign found!"));
        assert!(!outcome.is_bid());
    }

    #[test]
    fn bid_serializes_missing_fields_as_null() {
        let outcome = BidOutcome::Bid(BannerResponse {
            id: "65f1c0a2b3c4d".to_string(),
            campaign_name: Some(json!("Summer")),
            advertiser: None,
            bid_price: Number::from_f64(0.1).unwrap(),
            ad_id: None,
            creative_id: Some(json!(167)),
            image_url: None,
            landing_page_url: None,
            creative_type: None,
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "id": "65f1c0a2b3c4d",
                "campaign_name": "Summer",
                "advertiser": null,
                "bid_price": 0.1,
                "ad_id": null,
                "creative_id": 167,
                "image_url": null,
                "landing_page_url": null,
                "creative_type": null
            })
        );
        assert!(outcome.bid().is_some());
    }
}
