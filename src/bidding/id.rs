//! 响应 ID 生成器。

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// 为每个 BannerResponse 生成 ID，同一进程内不能重复
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// 进程内最近一次发出的微秒时间戳
static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(0);

/// 13 位十六进制 ID：8 位秒 + 5 位微秒
///
/// 同一微秒内的多次调用会顺延到下一个微秒，保证进程内严格递增。
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqIdGenerator;

impl IdGenerator for UniqIdGenerator {
    fn next_id(&self) -> String {
        let micros = next_monotonic_micros(&LAST_ISSUED_MICROS, Utc::now().timestamp_micros());
        format!("{:08x}{:05x}", micros / 1_000_000, micros % 1_000_000)
    }
}

fn next_monotonic_micros(last_issued: &AtomicI64, now: i64) -> i64 {
    let mut last = last_issued.load(Ordering::Relaxed);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match last_issued.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// 随机 UUID v4
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
