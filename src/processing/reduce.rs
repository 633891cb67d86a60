//! Reduction operations over numeric trip columns.

use crate::types::{TripDataSet, TripRecord};

/// Numeric columns of a [`TripRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    /// `duration_seconds`, always present.
    TripDuration,
    /// `birth_year`, present only for some records.
    BirthYear,
}

impl NumericColumn {
    fn value(&self, record: &TripRecord) -> Option<f64> {
        match self {
            Self::TripDuration => Some(record.duration_seconds),
            Self::BirthYear => record.birth_year.map(f64::from),
        }
    }
}

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count present values.
    Count,
    /// Sum present values.
    Sum,
    /// Arithmetic mean of present values.
    Mean,
    /// Minimum present value.
    Min,
    /// Maximum present value.
    Max,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// Absent values (e.g. records without a birth year) are skipped entirely.
///
/// - For `Count`, returns `Some(n)` where `n` is the number of present values (possibly 0).
/// - For `Sum`/`Mean`/`Min`/`Max`, returns `None` if there are no present values.
pub fn reduce(dataset: &TripDataSet, column: NumericColumn, op: ReduceOp) -> Option<f64> {
    reduce_records(dataset.records(), column, op)
}

/// Same as [`reduce`], over a plain record slice.
pub fn reduce_records(records: &[TripRecord], column: NumericColumn, op: ReduceOp) -> Option<f64> {
    let mut n = 0usize;
    let mut acc: Option<f64> = None;
    for v in records.iter().filter_map(|r| column.value(r)) {
        n += 1;
        acc = Some(match (op, acc) {
            (ReduceOp::Count, _) => 0.0,
            (ReduceOp::Sum | ReduceOp::Mean, Some(a)) => a + v,
            (ReduceOp::Min, Some(a)) => a.min(v),
            (ReduceOp::Max, Some(a)) => a.max(v),
            (_, None) => v,
        });
    }

    match op {
        ReduceOp::Count => Some(n as f64),
        ReduceOp::Mean => acc.map(|sum| sum / n as f64),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => acc,
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, NumericColumn, ReduceOp};
    use crate::types::test_support::trip;
    use crate::types::{DatasetColumns, TripDataSet};

    fn dataset_with_sparse_birth_years() -> TripDataSet {
        let mut a = trip("2017-01-02 08:00:00", 100.0);
        a.birth_year = Some(1990);
        let b = trip("2017-01-02 09:00:00", 200.0);
        let mut c = trip("2017-01-02 10:00:00", 300.0);
        c.birth_year = Some(1970);
        TripDataSet::new(DatasetColumns::all(), vec![a, b, c])
    }

    #[test]
    fn reduce_duration_sum_and_mean() {
        let ds = dataset_with_sparse_birth_years();
        assert_eq!(reduce(&ds, NumericColumn::TripDuration, ReduceOp::Sum), Some(600.0));
        assert_eq!(reduce(&ds, NumericColumn::TripDuration, ReduceOp::Mean), Some(200.0));
        assert_eq!(reduce(&ds, NumericColumn::TripDuration, ReduceOp::Count), Some(3.0));
    }

    #[test]
    fn reduce_skips_absent_values() {
        let ds = dataset_with_sparse_birth_years();
        assert_eq!(reduce(&ds, NumericColumn::BirthYear, ReduceOp::Count), Some(2.0));
        assert_eq!(reduce(&ds, NumericColumn::BirthYear, ReduceOp::Min), Some(1970.0));
        assert_eq!(reduce(&ds, NumericColumn::BirthYear, ReduceOp::Max), Some(1990.0));
        assert_eq!(reduce(&ds, NumericColumn::BirthYear, ReduceOp::Mean), Some(1980.0));
    }

    #[test]
    fn reduce_over_empty_dataset() {
        let ds = TripDataSet::new(DatasetColumns::all(), Vec::new());
        assert_eq!(reduce(&ds, NumericColumn::TripDuration, ReduceOp::Count), Some(0.0));
        assert_eq!(reduce(&ds, NumericColumn::TripDuration, ReduceOp::Sum), None);
        assert_eq!(reduce(&ds, NumericColumn::TripDuration, ReduceOp::Mean), None);
        assert_eq!(reduce(&ds, NumericColumn::BirthYear, ReduceOp::Min), None);
    }
}
