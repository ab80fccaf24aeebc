//! 時間格式
//!
//! 對外交換的時間一律使用本地時間文字格式 `YYYY-MM-DD HH:MM:SS`
//! （精確到秒，不帶時區），日期使用 `YYYY-MM-DD`，
//! 與既有排程資料列保持往返相容。

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::{PlanError, Result};

/// 時間戳格式（精確到秒）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 格式化時間戳
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// 解析時間戳
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| PlanError::InvalidTimestamp(format!("{s}: {e}")))
}

/// 格式化日期
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 解析日期
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| PlanError::InvalidTimestamp(format!("{s}: {e}")))
}

/// 將起點加上以小時計的工時，取整到秒
pub fn add_hours(start: NaiveDateTime, hours: Decimal) -> Result<NaiveDateTime> {
    let seconds = (hours * Decimal::from(3600))
        .round()
        .to_i64()
        .ok_or_else(|| PlanError::Calculation(format!("工時 {hours} 小時超出可表示範圍")))?;
    start
        .checked_add_signed(Duration::seconds(seconds))
        .ok_or_else(|| PlanError::Calculation(format!("工時 {hours} 小時超出可表示範圍")))
}

/// serde 模組：`NaiveDateTime` ↔ `YYYY-MM-DD HH:MM:SS`
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// serde 模組：`Option<NaiveDateTime>` ↔ `YYYY-MM-DD HH:MM:SS`（空值為 null）
pub mod optional_timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => serializer.serialize_some(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_timestamp_round_trip() {
        let original = ts(2025, 11, 20, 8, 30, 15);
        let text = format_timestamp(original);
        assert_eq!(text, "2025-11-20 08:30:15");
        assert_eq!(parse_timestamp(&text).unwrap(), original);
    }

    #[test]
    fn test_parse_rejects_wrong_format() {
        // ISO 8601 的 T 分隔不在相容格式內
        assert!(parse_timestamp("2025-11-20T08:30:15").is_err());
        assert!(parse_date("20.11.2025").is_err());
    }

    #[test]
    fn test_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        assert_eq!(format_date(date), "2025-11-20");
        assert_eq!(parse_date("2025-11-20").unwrap(), date);
    }

    #[test]
    fn test_add_hours_rounds_to_seconds() {
        let start = ts(2025, 11, 20, 8, 0, 0);

        // 2 小時整
        assert_eq!(
            add_hours(start, Decimal::from(2)).unwrap(),
            ts(2025, 11, 20, 10, 0, 0)
        );

        // 1.5 小時 = 5400 秒
        assert_eq!(
            add_hours(start, Decimal::new(15, 1)).unwrap(),
            ts(2025, 11, 20, 9, 30, 0)
        );

        // 1/3 小時 = 1200 秒
        let third = rust_decimal::Decimal::from(1) / rust_decimal::Decimal::from(3);
        assert_eq!(add_hours(start, third).unwrap(), ts(2025, 11, 20, 8, 20, 0));
    }
}
