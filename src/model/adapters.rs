// src/model/adapters.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 竞价输入的来源：一份 bid request JSON 和一份 campaign 数组 JSON
pub trait InputSource: Send + Sync {
    fn bid_request_json(&self) -> io::Result<String>;
    fn campaigns_json(&self) -> io::Result<String>;
}

/// 从本地文件读取输入
pub struct FileInputSource {
    pub bid_request_file: PathBuf,
    pub campaigns_file: PathBuf,
}

impl FileInputSource {
    pub fn new(bid_request_file: impl AsRef<Path>, campaigns_file: impl AsRef<Path>) -> Self {
        Self {
            bid_request_file: bid_request_file.as_ref().to_path_buf(),
            campaigns_file: campaigns_file.as_ref().to_path_buf(),
        }
    }
}

impl InputSource for FileInputSource {
    fn bid_request_json(&self) -> io::Result<String> {
        fs::read_to_string(&self.bid_request_file)
    }

    fn campaigns_json(&self) -> io::Result<String> {
        fs::read_to_string(&self.campaigns_file)
    }
}
