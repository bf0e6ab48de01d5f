//! Past record aggregation
//!
//! Reduces either input mode of a [`PastRecord`] to a single
//! `(total_points, total_credits)` pair. Rows that are not fully entered are
//! skipped rather than rejected, so a record can be aggregated while the
//! student is still typing.

use crate::core::error::ProjectionError;
use crate::core::models::{PastRecord, PastTotals};
use crate::core::numeric::{mul4, round4};

/// Aggregate a past record into grade-point and credit totals.
///
/// Each term's `average * credits` is rounded before it is added, and the
/// running sums are rounded after every addition.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidPastRecord`] when no usable credits remain.
pub fn aggregate(record: &PastRecord) -> Result<PastTotals, ProjectionError> {
    let totals = match record {
        PastRecord::Itemized(entries) => {
            let mut totals = PastTotals {
                total_points: 0.0,
                total_credits: 0.0,
            };
            let mut skipped = 0usize;
            for entry in entries {
                if let Some((average, credits)) = entry.usable() {
                    totals.total_points = round4(totals.total_points + mul4(average, credits));
                    totals.total_credits = round4(totals.total_credits + credits);
                } else {
                    skipped += 1;
                }
            }
            if skipped > 0 {
                crate::debug!(
                    "Skipped {skipped} incomplete term(s) out of {}",
                    entries.len()
                );
            }
            totals
        }
        PastRecord::Aggregate(pair) => pair.usable().map_or(
            PastTotals {
                total_points: 0.0,
                total_credits: 0.0,
            },
            |(average, credits)| PastTotals {
                total_points: mul4(average, credits),
                total_credits: round4(credits),
            },
        ),
    };

    if totals.total_credits <= 0.0 {
        crate::debug!("Past record ({}) has no usable credits", record.mode_name());
        return Err(ProjectionError::InvalidPastRecord);
    }

    crate::debug!(
        "Aggregated {} record: {} points over {} credits",
        record.mode_name(),
        totals.total_points,
        totals.total_credits
    );
    Ok(totals)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::core::models::{AggregateRecord, GradeEntry};

    #[test]
    fn test_itemized_sums_terms() {
        let record = PastRecord::Itemized(vec![
            GradeEntry::new(8.0, 24.0),
            GradeEntry::new(9.0, 24.0),
        ]);
        let totals = aggregate(&record).unwrap();
        assert_eq!(totals.total_points, 408.0);
        assert_eq!(totals.total_credits, 48.0);

        let record = PastRecord::Itemized(vec![
            GradeEntry::new(8.5, 24.0),
            GradeEntry::new(9.0, 24.0),
        ]);
        assert_eq!(aggregate(&record).unwrap().total_points, 420.0);
    }

    #[test]
    fn test_itemized_rounds_each_product() {
        // 0.1 * 3.0 is 0.30000000000000004 before rounding
        let record = PastRecord::Itemized(vec![
            GradeEntry::new(0.1, 3.0),
            GradeEntry::new(0.2, 3.0),
        ]);
        let totals = aggregate(&record).unwrap();
        assert_eq!(totals.total_points, 0.9);
        assert_eq!(totals.total_credits, 6.0);
    }

    #[test]
    fn test_itemized_skips_incomplete_rows() {
        let record = PastRecord::Itemized(vec![
            GradeEntry::new(7.0, 20.0),
            GradeEntry::partial(Some(9.0), None),
            GradeEntry::partial(None, Some(18.0)),
            GradeEntry::default(),
        ]);
        let totals = aggregate(&record).unwrap();
        assert_eq!(totals.total_points, 140.0);
        assert_eq!(totals.total_credits, 20.0);
    }

    #[test]
    fn test_itemized_with_no_usable_rows_fails() {
        let record = PastRecord::Itemized(vec![GradeEntry::default()]);
        assert_eq!(aggregate(&record), Err(ProjectionError::InvalidPastRecord));

        let empty = PastRecord::Itemized(Vec::new());
        assert_eq!(aggregate(&empty), Err(ProjectionError::InvalidPastRecord));
    }

    #[test]
    fn test_zero_credit_terms_fail() {
        let record = PastRecord::Itemized(vec![GradeEntry::new(9.0, 0.0)]);
        assert_eq!(aggregate(&record), Err(ProjectionError::InvalidPastRecord));
    }

    #[test]
    fn test_aggregate_mode() {
        let record = PastRecord::Aggregate(AggregateRecord::new(8.5, 48.0));
        let totals = aggregate(&record).unwrap();
        assert_eq!(totals.total_points, 408.0);
        assert_eq!(totals.total_credits, 48.0);
    }

    #[test]
    fn test_aggregate_mode_missing_field_fails() {
        let record = PastRecord::Aggregate(AggregateRecord {
            average: Some(8.5),
            credits: None,
        });
        assert_eq!(aggregate(&record), Err(ProjectionError::InvalidPastRecord));
    }

    #[test]
    fn test_many_terms_do_not_drift() {
        let record = PastRecord::Itemized(vec![GradeEntry::new(7.1, 3.0); 10]);
        let totals = aggregate(&record).unwrap();
        assert_eq!(totals.total_points, 213.0);
        assert_eq!(totals.total_credits, 30.0);
    }
}
