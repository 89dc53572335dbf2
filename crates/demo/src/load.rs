// File: crates/demo/src/load.rs
// Summary: Read raw sales rows (date, amount) from CSV.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, warn};

pub(crate) fn load_sales_csv(path: &Path) -> Result<Vec<(NaiveDate, f64)>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_sales(file)
}

pub(crate) fn load_sales<R: Read>(reader: R) -> Result<Vec<(NaiveDate, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "day", "created_at", "createdat", "order_date"])
        .context("no date column (date, day, created_at, order_date)")?;
    let i_total = idx(&["total", "amount", "value", "price"])
        .context("no total column (total, amount, value, price)")?;

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let date = rec.get(i_date).and_then(parse_date);
        let total = rec.get(i_total).and_then(|s| s.parse::<f64>().ok());
        match (date, total) {
            (Some(date), Some(total)) if total.is_finite() => out.push((date, total)),
            _ => warn!(row = line + 1, "skipping row without a usable date/total"),
        }
    }
    Ok(out)
}

/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp (date part used), or `DD/MM/YYYY`.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let head = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}
