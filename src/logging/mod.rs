pub mod bid_log;
pub mod logger;
