use crate::bidding::error::BidError;
use crate::model::signals::ExtractedSignals;
use crate::openrtb::request::BidRequest;

/// 从 BidRequest 中提取定向信号
///
/// 只读取第一个 impression（`imp[0]`），不支持多 impression 请求。
/// `imp[0].bidfloor`、`device.os`、`device.geo.country` 缺一不可；
/// 设备系统转为小写，国家代码和 banner 尺寸保持原样。
pub fn extract(bid_request: &BidRequest) -> Result<ExtractedSignals, BidError> {
    let imp = bid_request.first_imp();

    let bid_floor = imp
        .and_then(|imp| imp.bidfloor)
        .ok_or(BidError::MissingField { field: "imp[0].bidfloor" })?;
    let device_os = bid_request
        .device_os()
        .ok_or(BidError::MissingField { field: "device.os" })?;
    let country = bid_request
        .country()
        .ok_or(BidError::MissingField { field: "device.geo.country" })?;

    if !bid_floor.is_finite() || bid_floor < 0.0 {
        return Err(BidError::InvalidBidFloor(bid_floor));
    }

    // banner.format 不做校验，缺失时按空列表处理
    let banner_formats = imp
        .and_then(|imp| imp.banner.as_ref())
        .and_then(|banner| banner.format.clone())
        .unwrap_or_default();

    Ok(ExtractedSignals {
        bid_floor,
        device_os: device_os.to_ascii_lowercase(),
        country: country.to_string(),
        banner_formats,
    })
}
