use thiserror::Error;

/// 竞价流程中的所有错误
///
/// `MissingField`、`InvalidBidFloor`、`NoEligibleCampaign` 由 pipeline 转换成
/// `{"error": ...}` 响应；输入解析失败和输出序列化失败直接返回给调用方。
#[derive(Debug, Error)]
pub enum BidError {
    #[error("Invalid JSON format for bid request or campaign data!")]
    InvalidInputFormat(#[source] simd_json::Error),

    #[error("Required bid request fields are missing!")]
    MissingField { field: &'static str },

    #[error("Bid floor must be a non-negative number!")]
    InvalidBidFloor(f64),

    #[error("No suitable campaign found!")]
    NoEligibleCampaign,

    #[error("Failed to serialize bid response")]
    OutputSerialization(#[source] serde_json::Error),
}

impl BidError {
    /// 是否属于单次请求的数据问题，可以转换成错误响应
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BidError::MissingField { .. } | BidError::InvalidBidFloor(_) | BidError::NoEligibleCampaign
        )
    }
}
