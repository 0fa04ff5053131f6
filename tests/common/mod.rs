//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_origin;

use adviceslip::AdviceRecord;

pub fn record(id: u64, text: &str) -> AdviceRecord {
    AdviceRecord {
        id,
        text: text.to_string(),
    }
}
