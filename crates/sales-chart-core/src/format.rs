// File: crates/sales-chart-core/src/format.rs
// Summary: Label formatting: bucket dates and currency values with locale grouping.

use num_format::{Locale, ToFormattedString};

use crate::series::BucketLabel;

/// How bucket dates are printed under the x-axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateLabelFormat {
    /// `day/month`
    #[default]
    DayMonth,
    /// `day/month/year`; falls back to `day/month` when the bucket has no year.
    DayMonthYear,
}

pub fn format_date_label(label: &BucketLabel, format: DateLabelFormat, zero_pad: bool) -> String {
    let (day, month) = if zero_pad {
        (format!("{:02}", label.day), format!("{:02}", label.month))
    } else {
        (label.day.to_string(), label.month.to_string())
    };
    match (format, label.year) {
        (DateLabelFormat::DayMonthYear, Some(year)) => format!("{day}/{month}/{year}"),
        _ => format!("{day}/{month}"),
    }
}

/// Currency prefix plus the value rounded to a whole unit with locale grouping.
///
/// `format_currency(1234.4, "$", &Locale::en) == "$1,234"`.
pub fn format_currency(value: f64, symbol: &str, locale: &Locale) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    // f64 -> u64 saturates, which is fine for display.
    let whole = rounded.abs() as u64;
    format!("{sign}{symbol}{}", whole.to_formatted_string(locale))
}

/// Map a locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive, `-` or `_`): `en`, `en_us`, `us`, `de`,
/// `de_de`, `fr`, `fr_fr`, `es`, `es_es`, `it`, `it_it`, `pt`, `pt_pt`,
/// `pt_br`, `nl`, `nl_nl`.
pub fn locale_from_tag(tag: &str) -> Option<&'static Locale> {
    let tag = tag.trim().to_lowercase().replace('-', "_");
    let locale = match tag.as_str() {
        "en" | "en_us" | "us" => &Locale::en,
        "de" | "de_de" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => return None,
    };
    Some(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_day_month() {
        let l = BucketLabel::new(3, 7);
        assert_eq!(format_date_label(&l, DateLabelFormat::DayMonth, false), "3/7");
        assert_eq!(format_date_label(&l, DateLabelFormat::DayMonth, true), "03/07");
    }

    #[test]
    fn date_label_with_year() {
        let l = BucketLabel::with_year(25, 12, 2024);
        assert_eq!(format_date_label(&l, DateLabelFormat::DayMonthYear, false), "25/12/2024");
        let no_year = BucketLabel::new(25, 12);
        assert_eq!(format_date_label(&no_year, DateLabelFormat::DayMonthYear, false), "25/12");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234567.0, "$", &Locale::en), "$1,234,567");
        assert_eq!(format_currency(1200.4, "€", &Locale::de), "€1.200");
        assert_eq!(format_currency(0.0, "$", &Locale::en), "$0");
    }

    #[test]
    fn currency_non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN, "$", &Locale::en), "$0");
    }

    #[test]
    fn locale_tags() {
        assert!(locale_from_tag("en-US").is_some());
        assert!(locale_from_tag("PT_BR").is_some());
        assert!(locale_from_tag("xx").is_none());
    }
}
