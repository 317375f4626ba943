//! 时间辅助模块
//!
//! 后端以 RFC 3339 字符串传输时间，反序列化为 `DateTime<Utc>`；
//! 这里集中截止判断、表单输入转换与展示格式化。
//!
//! 表单输入与页面展示都是浏览者所在时区的墙上时间：无后缀的函数使用
//! `Local`，`*_in` 版本接受任意时区。

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// `<input type="datetime-local">` 的取值格式
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// 当前时间 (wasm 下取浏览器时钟)
#[inline]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// 截止时间严格早于 `now` 即视为逾期
#[inline]
pub fn is_past_due(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due < now
}

/// 距离截止还剩的整天数，逾期为负
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (due - now).num_days()
}

/// 按浏览者本地时区解析表单中的日期输入
pub fn parse_input(s: &str) -> Option<DateTime<Utc>> {
    parse_input_in(s, &Local)
}

/// 解析表单中的日期输入
///
/// 接受 RFC 3339 (自带偏移，忽略 `tz`)、`datetime-local` (`2026-05-01T23:59`)
/// 与纯日期 (`2026-05-01`，取当天 23:59)，后两者视为 `tz` 的墙上时间。
/// 无法解析或落在夏令时空档内时返回 `None`。
pub fn parse_input_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, INPUT_FORMAT).ok().or_else(|| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(23, 59, 0))
    })?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// 转为 `datetime-local` 输入框的值 (本地时区)
pub fn to_input_value(dt: DateTime<Utc>) -> String {
    to_input_value_in(dt, &Local)
}

pub fn to_input_value_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// `Mar 5, 2026`
pub fn format_date(dt: DateTime<Utc>) -> String {
    format_date_in(dt, &Local)
}

pub fn format_date_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format("%b %-d, %Y").to_string()
}

/// `Mar 5, 2026 14:30`
pub fn format_date_time(dt: DateTime<Utc>) -> String {
    format_date_time_in(dt, &Local)
}

pub fn format_date_time_in<Tz: TimeZone>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format("%b %-d, %Y %H:%M").to_string()
}

/// 可选时间的格式化，缺失时返回占位
pub fn format_opt(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_past_due_is_strict() {
        let due = at("2026-03-01T12:00:00Z");
        assert!(!is_past_due(due, due));
        assert!(is_past_due(due, at("2026-03-01T12:00:01Z")));
        assert!(!is_past_due(due, at("2026-02-28T12:00:00Z")));
    }

    #[test]
    fn test_days_until() {
        let now = at("2026-03-01T00:00:00Z");
        assert_eq!(days_until(at("2026-03-04T06:00:00Z"), now), 3);
        assert_eq!(days_until(at("2026-02-27T00:00:00Z"), now), -2);
    }

    #[test]
    fn test_parse_input_variants() {
        let utc = Utc;
        assert_eq!(
            parse_input_in("2026-05-01T08:30", &utc),
            Some(at("2026-05-01T08:30:00Z"))
        );
        assert_eq!(
            parse_input_in("2026-05-01", &utc),
            Some(at("2026-05-01T23:59:00Z"))
        );
        assert_eq!(
            parse_input_in("2026-05-01T08:30:00+02:00", &utc),
            Some(at("2026-05-01T06:30:00Z"))
        );
        assert_eq!(parse_input_in("  ", &utc), None);
        assert_eq!(parse_input("tomorrow"), None);
    }

    #[test]
    fn test_parse_input_uses_wall_clock_offset() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            parse_input_in("2026-03-05T23:59", &est),
            Some(at("2026-03-06T04:59:00Z"))
        );
        assert_eq!(
            parse_input_in("2026-03-05", &est),
            Some(at("2026-03-06T04:59:00Z"))
        );
        // 带偏移的输入不受时区影响
        assert_eq!(
            parse_input_in("2026-03-05T23:59:00Z", &est),
            Some(at("2026-03-05T23:59:00Z"))
        );
    }

    #[test]
    fn test_formatting_in_offset() {
        let dt = at("2026-03-06T02:30:00Z");
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_in(dt, &est), "Mar 5, 2026");
        assert_eq!(format_date_time_in(dt, &est), "Mar 5, 2026 21:30");
        assert_eq!(to_input_value_in(dt, &est), "2026-03-05T21:30");
        assert_eq!(format_date_in(dt, &Utc), "Mar 6, 2026");
        assert_eq!(to_input_value_in(dt, &Utc), "2026-03-06T02:30");
        assert_eq!(format_opt(None), "-");
    }

    #[test]
    fn test_input_value_round_trips_in_local_time() {
        let dt = at("2026-07-14T09:15:00Z");
        assert_eq!(parse_input(&to_input_value(dt)), Some(dt));
    }
}
