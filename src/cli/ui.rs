use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use inquire::Confirm;

/// Parse a YYYY-MM-DD date into a UTC midnight timestamp.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}', expected YYYY-MM-DD", s))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Dollar amount with thousands separators, no cents.
pub fn money(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Ask before a delete unless the caller passed --yes.
pub fn confirm_delete(what: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    let confirmed = Confirm::new(&format!("Delete {}?", what))
        .with_default(false)
        .prompt()
        .unwrap_or(false);
    Ok(confirmed)
}

/// Split repeated `key=value` arguments into pairs.
pub fn parse_meta(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| anyhow!("Invalid metadata '{}', expected key=value", pair))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let ts = parse_date("2024-03-11").unwrap();
        assert_eq!(format_date(&ts), "2024-03-11");
        assert!(parse_date("03/11/2024").is_err());
    }

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(4800.0), "$4,800");
        assert_eq!(money(132000.0), "$132,000");
        assert_eq!(money(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title here", 10), "a very ...");
    }

    #[test]
    fn test_parse_meta() {
        let pairs = parse_meta(&["duration=30m".to_string()]).unwrap();
        assert_eq!(pairs, vec![("duration".to_string(), "30m".to_string())]);
        assert!(parse_meta(&["nope".to_string()]).is_err());
    }
}
