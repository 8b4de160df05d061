use crate::error::invalid_input;
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use macfield_core::domain::OrderId;
use std::str::FromStr;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn parse_order_id(raw: &str) -> Result<OrderId> {
    OrderId::from_str(raw.trim()).map_err(|_| invalid_input(format!("invalid order id: {}", raw)))
}

pub fn format_timestamp_datetime(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| timestamp.to_string())
}
