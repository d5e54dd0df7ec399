use crate::bidding::id::IdGenerator;
use crate::model::campaign::Campaign;
use crate::openrtb::response::BannerResponse;

/// 把中标 campaign 映射成对外的 BannerResponse
pub struct ResponseBuilder<G> {
    ids: G,
}

impl<G: IdGenerator> ResponseBuilder<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// 不会失败：campaign 上缺失的创意字段一律输出为 null
    pub fn build(&self, campaign: &Campaign) -> BannerResponse {
        BannerResponse {
            id: self.ids.next_id(),
            campaign_name: campaign.campaignname.clone(),
            advertiser: campaign.advertiser.clone(),
            bid_price: campaign.price.clone(),
            ad_id: campaign.code.clone(),
            creative_id: campaign.creative_id.clone(),
            image_url: campaign.image_url.clone(),
            landing_page_url: campaign.url.clone(),
            creative_type: campaign.creative_type.clone(),
        }
    }
}
