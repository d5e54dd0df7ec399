use std::cmp::Ordering;

use crate::bidding::error::BidError;
use crate::model::campaign::Campaign;
use crate::model::signals::ExtractedSignals;

/// 判断 campaign 是否满足底价、设备系统和国家三项定向条件
///
/// 设备系统是子串匹配：`hs_os` 为 "ios,android" 时 "android" 可以命中，
/// 但 "os" 这类碰巧是子串的值也会命中。这个宽松规则是刻意保留的，不要改成精确匹配。
pub fn is_eligible(signals: &ExtractedSignals, campaign: &Campaign) -> bool {
    campaign.price_as_f64() >= signals.bid_floor
        && campaign
            .hs_os
            .to_ascii_lowercase()
            .contains(&signals.device_os.to_ascii_lowercase())
        && campaign.country.eq_ignore_ascii_case(&signals.country)
}

/// 按输入顺序返回所有符合条件的 campaign
pub fn eligible<'a>(signals: &ExtractedSignals, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|campaign| is_eligible(signals, campaign))
        .collect()
}

/// 价格最高者胜出；稳定排序，同价时保留输入顺序中的第一个
pub fn pick_highest(mut candidates: Vec<&Campaign>) -> Result<&Campaign, BidError> {
    candidates.sort_by(|a, b| {
        b.price_as_f64()
            .partial_cmp(&a.price_as_f64())
            .unwrap_or(Ordering::Equal)
    });
    candidates.first().copied().ok_or(BidError::NoEligibleCampaign)
}

/// 在 campaign 集合中选出最佳的一个
pub fn select<'a>(signals: &ExtractedSignals, campaigns: &'a [Campaign]) -> Result<&'a Campaign, BidError> {
    pick_highest(eligible(signals, campaigns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn signals(bid_floor: f64, device_os: &str, country: &str) -> ExtractedSignals {
        ExtractedSignals {
            bid_floor,
            device_os: device_os.to_string(),
            country: country.to_string(),
            banner_formats: Vec::new(),
        }
    }

    fn name_of(campaign: &Campaign) -> String {
        campaign.display_name().unwrap_or_default()
    }

    #[test]
    fn highest_price_wins() {
        let campaigns = vec![
            Campaign::new(0.10, "android", "BGD").with_name("cheap"),
            Campaign::new(0.20, "android", "BGD").with_name("rich"),
        ];
        let selected = select(&signals(0.05, "android", "BGD"), &campaigns).unwrap();
        assert_eq!(name_of(selected), "rich");
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let campaigns = vec![
            Campaign::new(0.05, "android", "BGD").with_name("low"),
            Campaign::new(0.30, "android", "BGD").with_name("first"),
            Campaign::new(0.30, "android", "BGD").with_name("second"),
        ];
        let selected = select(&signals(0.01, "android", "BGD"), &campaigns).unwrap();
        assert_eq!(name_of(selected), "first");
    }

    #[test]
    fn price_equal_to_floor_is_eligible() {
        let campaign = Campaign::new(0.5, "ios", "USA");
        assert!(is_eligible(&signals(0.5, "ios", "USA"), &campaign));
        assert!(!is_eligible(&signals(0.51, "ios", "USA"), &campaign));
    }

    #[test]
    fn os_is_a_case_insensitive_substring_match() {
        let campaign = Campaign::new(1.0, "Android,iOS,Desktop", "BGD");
        assert!(is_eligible(&signals(0.0, "android", "BGD"), &campaign));
        assert!(is_eligible(&signals(0.0, "IOS", "BGD"), &campaign));
        // 宽松匹配："os" 是 "ios" 的子串
        assert!(is_eligible(&signals(0.0, "os", "BGD"), &campaign));
        assert!(!is_eligible(&signals(0.0, "windows", "BGD"), &campaign));
    }

    #[test]
    fn empty_device_os_matches_any_campaign_os() {
        assert!(is_eligible(&signals(0.0, "", "BGD"), &Campaign::new(1.0, "", "BGD")));
    }

    #[test]
    fn country_is_case_insensitive_exact_match() {
        let campaign = Campaign::new(1.0, "android", "Bgd");
        assert!(is_eligible(&signals(0.0, "android", "BGD"), &campaign));
        assert!(!is_eligible(&signals(0.0, "android", "BG"), &campaign));
        assert!(!is_eligible(&signals(0.0, "android", "BGDX"), &campaign));
    }

    #[test]
    fn empty_collection_has_no_winner() {
        assert!(matches!(
            select(&signals(0.0, "android", "BGD"), &[]),
            Err(BidError::NoEligibleCampaign)
        ));
    }

    #[test]
    fn nothing_eligible_has_no_winner() {
        let campaigns = vec![
            Campaign::new(0.01, "android", "BGD"),
            Campaign::new(1.00, "ios", "BGD"),
            Campaign::new(1.00, "android", "IND"),
        ];
        assert!(matches!(
            select(&signals(0.05, "android", "BGD"), &campaigns),
            Err(BidError::NoEligibleCampaign)
        ));
        assert!(eligible(&signals(0.05, "android", "BGD"), &campaigns).is_empty());
    }

    fn arb_campaign() -> impl Strategy<Value = Campaign> {
        (
            prop::sample::select(vec![0.0, 0.05, 0.1, 0.2, 0.5]),
            prop::sample::select(vec!["android", "ios", "Android,iOS", "windows", ""]),
            prop::sample::select(vec!["BGD", "bgd", "USA", "IND"]),
        )
            .prop_map(|(price, os, country)| Campaign::new(price, os, country))
    }

    proptest! {
        #[test]
        fn selection_is_eligible_maximal_and_first_among_ties(
            campaigns in prop::collection::vec(arb_campaign(), 0..12),
            floor in prop::sample::select(vec![0.0, 0.05, 0.1, 0.3]),
            os in prop::sample::select(vec!["android", "ios", "os"]),
            country in prop::sample::select(vec!["BGD", "usa"]),
        ) {
            let signals = signals(floor, os, country);
            match select(&signals, &campaigns) {
                Ok(winner) => {
                    prop_assert!(winner.price_as_f64() >= floor);
                    prop_assert!(winner.hs_os.to_lowercase().contains(os));
                    prop_assert!(winner.country.eq_ignore_ascii_case(country));

                    let winner_index = campaigns.iter().position(|c| std::ptr::eq(c, winner)).unwrap();
                    for (index, campaign) in campaigns.iter().enumerate() {
                        if is_eligible(&signals, campaign) {
                            prop_assert!(campaign.price_as_f64() <= winner.price_as_f64());
                            if campaign.price_as_f64() == winner.price_as_f64() {
                                prop_assert!(index >= winner_index);
                            }
                        }
                    }
                }
                Err(err) => {
                    prop_assert!(matches!(err, BidError::NoEligibleCampaign));
                    prop_assert!(campaigns.iter().all(|c| !is_eligible(&signals, c)));
                }
            }
        }
    }
}
