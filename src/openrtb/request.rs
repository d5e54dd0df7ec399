use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OpenRTB BidRequest，只保留竞价决策需要的字段，其余字段在反序列化时忽略。
///
/// 需要校验的字段都声明为 `Option`：字段缺失属于可恢复的业务错误，
/// 由 extractor 处理；类型错误（例如 bidfloor 是字符串）则在解析阶段直接失败。
/// 只用于日志的 `id` 不限制类型。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BidRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub imp: Option<Vec<Imp>>,
    #[serde(default)]
    pub device: Option<Device>,
}

/// 广告展示机会（impression）
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Imp {
    #[serde(default)]
    pub bidfloor: Option<f64>,
    #[serde(default)]
    pub banner: Option<Banner>,
}

/// Banner 广告位描述
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Banner {
    #[serde(default)]
    pub format: Option<Vec<BannerFormat>>,
}

/// Banner 支持的尺寸；flexible 尺寸（wratio/hratio）可能只有宽或高
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerFormat {
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub h: Option<u32>,
}

impl BannerFormat {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w: Some(w), h: Some(h) }
    }
}

/// 设备信息
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Device {
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub geo: Option<Geo>,
}

/// 地理位置信息
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Geo {
    #[serde(default)]
    pub country: Option<String>,
}

impl BidRequest {
    /// 日志用的请求 ID：字符串原样返回，其他类型转成 JSON 文本
    pub fn request_id(&self) -> Option<String> {
        self.id.as_ref().and_then(|id| match id {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }

    /// 第一个 impression；多 impression 请求只处理 `imp[0]`
    pub fn first_imp(&self) -> Option<&Imp> {
        self.imp.as_ref().and_then(|imps| imps.first())
    }

    pub fn device_os(&self) -> Option<&str> {
        self.device.as_ref().and_then(|d| d.os.as_deref())
    }

    pub fn country(&self) -> Option<&str> {
        self.device
            .as_ref()
            .and_then(|d| d.geo.as_ref())
            .and_then(|g| g.country.as_deref())
    }
}
