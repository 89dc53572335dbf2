// File: crates/sales-chart-core/src/series.rs
// Summary: Series model for daily sales buckets (date label + aggregate total).
// Notes:
// - Point order is the caller's order; nothing here sorts except
//   `aggregate_daily`, which builds a fresh series from raw sales.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// Calendar identity of one bucket. `day` and `month` are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BucketLabel {
    pub day: u32,
    pub month: u32,
    /// Present in export variants of the series.
    pub year: Option<i32>,
}

impl BucketLabel {
    pub const fn new(day: u32, month: u32) -> Self {
        Self { day, month, year: None }
    }

    pub const fn with_year(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year: Some(year) }
    }
}

impl From<NaiveDate> for BucketLabel {
    fn from(date: NaiveDate) -> Self {
        Self::with_year(date.day(), date.month(), date.year())
    }
}

/// One aggregation bucket: a calendar day and its sales total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub total: f64,
    pub label: BucketLabel,
}

impl DataPoint {
    pub const fn new(total: f64, label: BucketLabel) -> Self {
        Self { total, label }
    }

    /// Total as used for scaling: negative or non-finite totals count as 0.
    #[inline]
    pub fn scaled_total(&self) -> f64 {
        if self.total.is_finite() { self.total.max(0.0) } else { 0.0 }
    }
}

/// Ordered sequence of buckets. Order decides x-position and line connectivity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Build a series from already-bucketed `(date, total)` pairs, keeping order.
    pub fn from_daily_totals<I>(totals: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let points = totals
            .into_iter()
            .map(|(date, total)| DataPoint::new(total, date.into()))
            .collect();
        Self { points }
    }

    /// Sum raw sale amounts into one bucket per calendar day, ascending by date.
    pub fn aggregate_daily<I>(sales: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (date, amount) in sales {
            *buckets.entry(date).or_insert(0.0) += amount;
        }
        Self::from_daily_totals(buckets)
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Largest scaled total; 0.0 for an empty series.
    pub fn max_total(&self) -> f64 {
        self.points.iter().map(DataPoint::scaled_total).fold(0.0, f64::max)
    }
}

impl From<Vec<DataPoint>> for Series {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
