//! RTB banner bidder.
//!
//! Evaluates one OpenRTB banner bid request against an in-memory campaign set:
//! targeting signals are extracted from the request, campaigns are filtered and
//! ranked by price, and the winner is turned into a bid response. Recoverable
//! failures come back as `{"error": ...}` payloads.

pub mod bidding;
pub mod config;
pub mod logging;
pub mod model;
pub mod openrtb;

pub use bidding::engine::{BidPipeline, RtbBannerBidder};
pub use bidding::error::BidError;
pub use openrtb::response::BidOutcome;
