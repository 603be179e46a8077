//! 时间工具函数
//!
//! 日期字符串解析统一在 API handler 层完成，
//! repository 层只接收 `DateTime<Utc>`。

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 日期开始 (00:00:00) → UTC 时间戳
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("valid midnight"))
}

/// 日期结束 (23:59:59.999) → UTC 时间戳
///
/// 窗口比较使用 `<= end` (含) 语义。
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(
        &date
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("valid end of day"),
    )
}

/// 解析宽松的日期输入：纯日期 (YYYY-MM-DD) 或 RFC 3339 时间戳
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_days() {
        assert!(parse_date("2025-10-06").is_ok());
        assert!(parse_date("06-10-2025").is_err());
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn day_bounds_cover_whole_day() {
        let date = parse_date("2025-10-06").unwrap();
        let start = day_start(date);
        let end = day_end(date);
        assert_eq!(start.to_rfc3339(), "2025-10-06T00:00:00+00:00");
        assert!(end > start);
        assert_eq!(end.date_naive(), date);
    }

    #[test]
    fn flexible_date_takes_both_forms() {
        let plain = parse_flexible_date("2025-10-06").unwrap();
        let stamped = parse_flexible_date("2025-10-06T15:30:00Z").unwrap();
        assert_eq!(plain, stamped);
        assert!(parse_flexible_date("garbage").is_none());
    }
}
