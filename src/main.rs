// src/main.rs

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use rtb_banner_bidder::bidding::engine::{render, RtbBannerBidder};
use rtb_banner_bidder::config::{CliArgs, ConfigManager};
use rtb_banner_bidder::logging::logger;
use rtb_banner_bidder::model::adapters::InputSource;
use rtb_banner_bidder::openrtb::response::ErrorResponse;

fn main() -> ExitCode {
    let config = ConfigManager::from_args(CliArgs::parse());

    // 初始化全局 tracing 日志，guard 持有到 main 结束
    let _guard = match logger::init(&config.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Unable to set global tracing subscriber: {}", e);
            None
        }
    };
    info!(
        bid_request = %config.bid_request_path.display(),
        campaigns = %config.campaigns_path.display(),
        "RTB banner bidder starting"
    );

    // 读取输入文件
    let source = config.input_source();
    let inputs = source
        .bid_request_json()
        .and_then(|request| source.campaigns_json().map(|campaigns| (request, campaigns)));
    let (bid_request_json, campaigns_json) = match inputs {
        Ok(inputs) => inputs,
        Err(e) => {
            error!(error = %e, "failed to read bid input files");
            print_error(&format!("Unable to read bid input: {}", e));
            return ExitCode::FAILURE;
        }
    };

    // 解析失败不进入 pipeline，直接输出错误
    let bidder = match RtbBannerBidder::from_json_with(&bid_request_json, &campaigns_json, config.id_generator()) {
        Ok(bidder) => bidder,
        Err(e) => {
            error!(error = ?e, "{}", e);
            print_error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let outcome = bidder.handle_bid_request();
    match render(&outcome, config.pretty) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(message: &str) {
    match serde_json::to_string(&ErrorResponse::new(message)) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}: {}", message, e),
    }
}
