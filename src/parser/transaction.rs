//! Transaction line parser.
//!
//! Parses one line of the sales log into a typed [`Transaction`]:
//!
//! ```text
//! salesStaffId,timestamp,[productId:qty|productId:qty|...],amount
//! ```
//!
//! Fields are split on a plain comma. A product list containing a literal
//! comma therefore shifts the remaining fields and the line is rejected for
//! its field count; there is no bracket-aware splitting.

use super::schema::{LineItem, Transaction};
use crate::utils::config::{
    DATE_ONLY_FORMAT, FIELD_COUNT, FIELD_SEPARATOR, NAIVE_TIMESTAMP_FORMATS, PRODUCT_LIST_CLOSE,
    PRODUCT_LIST_OPEN, PRODUCT_SEPARATOR, QUANTITY_SEPARATOR,
};
use crate::utils::error::{AnalyticsError, LineError};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;

/// Split raw input into trimmed, non-blank lines
///
/// **Public** - first step of every aggregation run
///
/// # Errors
/// * `AnalyticsError::EmptyInput` - nothing but blank lines
pub fn normalize_input(raw_text: &str) -> Result<Vec<&str>, AnalyticsError> {
    let lines: Vec<&str> = raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    Ok(lines)
}

/// Parse a single trimmed line into a transaction
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `line` - One non-blank input line
/// * `tz` - Timezone naive timestamps are expressed in
///
/// # Errors
/// * `LineError::FieldCount` - not exactly four comma-separated fields
/// * `LineError::InvalidTimestamp` - field 2 is not a date-time
/// * `LineError::InvalidAmount` - field 4 is not a finite number
/// * `LineError::MalformedProductList` - field 3 is not bracketed
/// * `LineError::QuantityOverflow` - item quantities do not fit in a `u64` total
pub fn parse_line(line: &str, tz: &FixedOffset) -> Result<Transaction, LineError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    let [staff_id, time_str, products, amount_str] = &fields[..] else {
        return Err(LineError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    let timestamp = parse_timestamp(time_str, tz)
        .ok_or_else(|| LineError::InvalidTimestamp(time_str.to_string()))?;

    let amount =
        parse_amount(amount_str).ok_or_else(|| LineError::InvalidAmount(amount_str.to_string()))?;

    let line_items = parse_line_items(products)?;

    if line_items
        .iter()
        .try_fold(0u64, |total, item| total.checked_add(item.quantity))
        .is_none()
    {
        return Err(LineError::QuantityOverflow(products.to_string()));
    }

    Ok(Transaction {
        staff_id: staff_id.to_string(),
        timestamp,
        line_items,
        amount,
    })
}

/// Parse a timestamp in any accepted layout
///
/// **Public** - exposed for callers validating single values
///
/// Accepts RFC 3339 with an explicit offset, ISO-8601 local date-times
/// (interpreted in `tz`) and bare dates (midnight UTC). The result is
/// always expressed in `tz`.
pub fn parse_timestamp(raw: &str, tz: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).single();
        }
    }

    NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// Parse a sale amount; rejects NaN and infinities
///
/// **Private** - internal utility
fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Parse the bracketed product list, dropping malformed pairs
///
/// **Public** - exposed for unit testing and reuse
///
/// A pair is kept only when its quantity is an integer greater than zero.
/// Dropped pairs never fail the line.
pub fn parse_line_items(field: &str) -> Result<Vec<LineItem>, LineError> {
    let inner = field
        .strip_prefix(PRODUCT_LIST_OPEN)
        .and_then(|rest| rest.strip_suffix(PRODUCT_LIST_CLOSE))
        .ok_or_else(|| LineError::MalformedProductList(field.to_string()))?;

    let items = inner
        .split(PRODUCT_SEPARATOR)
        .filter_map(|pair| {
            let item = parse_pair(pair);
            if item.is_none() {
                debug!("Dropping product pair '{}'", pair);
            }
            item
        })
        .collect();

    Ok(items)
}

/// Parse `productId:qty`; anything past a second `:` is ignored
///
/// **Private** - internal helper for parse_line_items
fn parse_pair(pair: &str) -> Option<LineItem> {
    let mut parts = pair.split(QUANTITY_SEPARATOR);
    let product_id = parts.next()?.trim();
    let quantity = parts.next()?.trim().parse::<i64>().ok()?;

    if quantity <= 0 {
        return None;
    }

    Some(LineItem {
        product_id: product_id.to_string(),
        quantity: quantity as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LineErrorKind;
    use chrono::Timelike;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_normalize_input_trims_and_drops_blank_lines() {
        let lines = normalize_input("  a  \n\n   \r\nb\r\n").unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_normalize_input_empty() {
        assert!(matches!(
            normalize_input(" \n\t\n"),
            Err(AnalyticsError::EmptyInput)
        ));
        assert!(matches!(normalize_input(""), Err(AnalyticsError::EmptyInput)));
    }

    #[test]
    fn test_parse_line_valid() {
        let tx = parse_line("8,2025-01-01T14:56:52,[149543:7|649302:7],100.50", &utc()).unwrap();

        assert_eq!(tx.staff_id, "8");
        assert_eq!(tx.amount, 100.50);
        assert_eq!(tx.line_items.len(), 2);
        assert_eq!(tx.line_items[0].product_id, "149543");
        assert_eq!(tx.total_quantity(), 14);
        assert_eq!(tx.date_key(), "2025-01-01");
        assert_eq!(tx.hour(), 14);
    }

    #[test]
    fn test_parse_line_invalid_timestamp() {
        let err = parse_line("8,not-a-date,[1:1],10", &utc()).unwrap_err();
        assert_eq!(err, LineError::InvalidTimestamp("not-a-date".to_string()));
    }

    #[test]
    fn test_parse_line_invalid_amount() {
        let err = parse_line("8,2025-01-01T10:00:00,[1:1],abc", &utc()).unwrap_err();
        assert!(matches!(err, LineError::InvalidAmount(_)));

        let err = parse_line("8,2025-01-01T10:00:00,[1:1],NaN", &utc()).unwrap_err();
        assert!(matches!(err, LineError::InvalidAmount(_)));
    }

    #[test]
    fn test_parse_line_quantity_overflow() {
        let line = "1,2025-01-01T10:00:00,[a:9223372036854775807|b:9223372036854775807|c:9223372036854775807],5";
        let err = parse_line(line, &utc()).unwrap_err();
        assert!(matches!(err, LineError::QuantityOverflow(_)));
        assert_eq!(err.kind(), LineErrorKind::LineProcessingError);

        // Two maximal quantities still fit in a u64 total
        let tx = parse_line(
            "1,2025-01-01T10:00:00,[a:9223372036854775807|b:9223372036854775807],5",
            &utc(),
        )
        .unwrap();
        assert_eq!(tx.total_quantity(), u64::MAX - 1);
    }

    #[test]
    fn test_parse_line_field_count() {
        let err = parse_line("8,2025-01-01T10:00:00,[1:1]", &utc()).unwrap_err();
        assert_eq!(
            err,
            LineError::FieldCount {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_comma_inside_product_list_misaligns_fields() {
        let err = parse_line("8,2025-01-01T10:00:00,[1:1,2:2],10", &utc()).unwrap_err();
        assert!(matches!(err, LineError::FieldCount { found: 5, .. }));
    }

    #[test]
    fn test_parse_line_items_drops_bad_pairs() {
        let items = parse_line_items("[a:3|b:0|c:-2|d:x|e|f:4]").unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "f"]);
    }

    #[test]
    fn test_parse_line_items_empty_list() {
        assert!(parse_line_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_line_items_requires_brackets() {
        assert!(matches!(
            parse_line_items("a:1|b:2"),
            Err(LineError::MalformedProductList(_))
        ));
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        let tz = utc();
        assert!(parse_timestamp("2025-01-01T14:56:52", &tz).is_some());
        assert!(parse_timestamp("2025-01-01T14:56:52.250", &tz).is_some());
        assert!(parse_timestamp("2025-01-01 14:56:52", &tz).is_some());
        assert!(parse_timestamp("2025-01-01T14:56", &tz).is_some());
        assert!(parse_timestamp("2025-01-01T14:56:52Z", &tz).is_some());
        assert!(parse_timestamp("2025-01-01", &tz).is_some());
        assert!(parse_timestamp("2025-13-01T00:00:00", &tz).is_none());
        assert!(parse_timestamp("", &tz).is_none());
    }

    #[test]
    fn test_parse_timestamp_offset_shifts_hour_and_date() {
        let lagos = FixedOffset::east_opt(3600).unwrap();

        // 00:30 local is 23:30 UTC the previous day
        let ts = parse_timestamp("2025-01-02T00:30:00", &lagos).unwrap();
        let tx = Transaction {
            staff_id: "1".to_string(),
            timestamp: ts,
            line_items: Vec::new(),
            amount: 0.0,
        };
        assert_eq!(tx.hour(), 0);
        assert_eq!(tx.date_key(), "2025-01-01");

        let explicit = parse_timestamp("2025-01-01T10:00:00Z", &lagos).unwrap();
        assert_eq!(explicit.hour(), 11);
    }
}
