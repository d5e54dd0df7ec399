// src/model/campaign.rs

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 候选广告活动
///
/// `price`、`hs_os`、`country` 参与匹配，必须存在（允许空字符串）；
/// 创意相关字段不做校验，保留原始 JSON 值原样透传到响应中。
/// `price` 保留原始数字（整数 1 不会变成 1.0），比较时转成 f64。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Campaign {
    pub price: Number,
    /// 支持的操作系统，可能是逗号拼接的列表，例如 "android,ios"
    pub hs_os: String,
    pub country: String,

    #[serde(default)]
    pub campaignname: Option<Value>,
    #[serde(default)]
    pub advertiser: Option<Value>,
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub creative_id: Option<Value>,
    #[serde(default)]
    pub image_url: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub creative_type: Option<Value>,
}

impl Campaign {
    /// 仅含匹配字段的 campaign，创意字段全部为空；NaN 或无穷大的价格按 0 处理
    pub fn new(price: f64, hs_os: &str, country: &str) -> Self {
        Self {
            price: Number::from_f64(price).unwrap_or_else(|| Number::from(0u64)),
            hs_os: hs_os.to_string(),
            country: country.to_string(),
            campaignname: None,
            advertiser: None,
            code: None,
            creative_id: None,
            image_url: None,
            url: None,
            creative_type: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.campaignname = Some(Value::String(name.to_string()));
        self
    }

    pub fn price_as_f64(&self) -> f64 {
        self.price.as_f64().unwrap_or(f64::NAN)
    }

    /// 日志用的展示名称
    pub fn display_name(&self) -> Option<String> {
        self.campaignname.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
