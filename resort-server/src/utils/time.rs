//! 时间工具函数 — 营业时区转换
//!
//! 所有日期→时间戳转换统一在 API handler 层完成，
//! repository 层只接收 `i64` Unix millis 或 `YYYY-MM-DD` 字符串。

use chrono::{Datelike, Days, Months, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 当前 Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 营业时区的今天
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// 日期 + 时分秒 → Unix millis (营业时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 日期开始 (00:00:00) → Unix millis (营业时区)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// 日期结束 → 次日 00:00:00 的 Unix millis (营业时区)
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

/// Unix millis → 营业时区的日期 (仪表盘按日分桶)
pub fn millis_to_date(millis: i64, tz: Tz) -> NaiveDate {
    tz.timestamp_millis_opt(millis)
        .earliest()
        .map(|dt| dt.date_naive())
        .unwrap_or_else(|| {
            Utc.timestamp_millis_opt(millis)
                .earliest()
                .map(|dt| dt.date_naive())
                .unwrap_or_default()
        })
}

/// 包含 `date` 的周 (周日开始，date-fns 默认)
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = date.weekday().num_days_from_sunday() as u64;
    let start = date - Days::new(offset);
    let end = start + Days::new(6);
    (start, end)
}

/// 包含 `date` 的自然月
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = (first + Months::new(1)).pred_opt().unwrap_or(first);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Seoul;

    #[test]
    fn week_starts_on_sunday() {
        // 2026-08-28 is a Friday
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let (start, end) = week_bounds(date);
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());

        // A Sunday is its own week start
        let (start, _) = week_bounds(start);
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
    }

    #[test]
    fn month_bounds_cover_full_month() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let (first, last) = month_bounds(date);
        assert_eq!(first, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn day_window_is_half_open() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let start = day_start_millis(date, Seoul);
        let end = day_end_millis(date, Seoul);
        // KST has no DST: exactly 24h
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
        assert_eq!(millis_to_date(start, Seoul), date);
        assert_eq!(millis_to_date(end - 1, Seoul), date);
        assert_eq!(millis_to_date(end, Seoul), date.succ_opt().unwrap());
    }

    #[test]
    fn rejects_bad_date_strings() {
        assert!(parse_date("2026-08-28").is_ok());
        assert!(parse_date("28/08/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }
}
