//! Locale-aware number, currency and date formatting.
//!
//! Formatting never fails: values that cannot be formatted come back as their
//! plain string form.

use crate::i18n::Locale;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with the locale's grouping and decimal separators.
///
/// Up to three fraction digits are kept, trailing zeros dropped.
pub fn format_number(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    assemble(negative, int_part, frac_part, locale)
}

/// Format a currency amount (two fraction digits) with the locale's symbol placement.
pub fn format_currency(value: f64, locale: Locale, currency: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let amount = assemble(false, int_part, frac_part, locale);

    let symbol = currency_symbol(currency);
    let sign = if value < 0.0 { "-" } else { "" };
    let config = locale.config();

    if config.currency_prefix {
        if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            format!("{sign}{symbol}\u{a0}{amount}")
        } else {
            format!("{sign}{symbol}{amount}")
        }
    } else {
        format!("{sign}{amount}\u{a0}{symbol}")
    }
}

/// Format a date as a long localized date (e.g. "October 19, 2026", "19 octobre 2026").
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let config = locale.config();
    date.format_localized(config.date_pattern, config.chrono_locale)
        .to_string()
}

/// Format a date given as text: RFC 3339, `YYYY-MM-DD`, or epoch milliseconds.
///
/// Unparsable input is returned unchanged.
pub fn format_date_str(raw: &str, locale: Locale) -> String {
    let trimmed = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return format_date(&date, locale);
    }
    if let Some(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return format_date(&Utc.from_utc_datetime(&date), locale);
    }
    if let Some(date) = trimmed
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
    {
        return format_date(&date, locale);
    }

    raw.to_string()
}

fn assemble(negative: bool, int_part: &str, frac_part: &str, locale: Locale) -> String {
    let config = locale.config();
    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 8);

    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(
        int_part,
        config.group_separator,
        config.min_grouping_digits,
    ));
    if !frac_part.is_empty() {
        out.push(config.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, separator: char, min_grouping_digits: usize) -> String {
    if digits.len() < min_grouping_digits {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn currency_symbol(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "IDR" => "Rp".to_string(),
        other => other.to_string(),
    }
}
