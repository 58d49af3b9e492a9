//! Actor Award Buckets Report
//!
//! Buckets each award record by [`AwardBucket::classify`] and reports, per
//! bucket, the fraction of records that carry an actor id.

use serde::Serialize;
use tracing::debug;

use super::query::Groups;
use super::{Cell, ReportKind, TabularReport};
use crate::models::AwardBucket;
use crate::storage::Snapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardBucketRow {
    pub awards_bucket: AwardBucket,
    pub actor_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct AwardBucketReport {
    pub rows: Vec<AwardBucketRow>,
}

#[derive(Debug, Default)]
struct BucketTally {
    records: u64,
    with_actor: u64,
}

impl AwardBucketReport {
    /// COUNT(actor_id) / COUNT(*) per bucket, buckets in first-appearance order
    pub fn generate(snapshot: &Snapshot) -> Self {
        let mut groups: Groups<AwardBucket, BucketTally> = Groups::new();
        for award in &snapshot.actor_awards {
            let tally = groups.entry(AwardBucket::classify(award.awards.as_deref()));
            tally.records += 1;
            if award.actor_id.is_some() {
                tally.with_actor += 1;
            }
        }

        let rows: Vec<_> = groups
            .into_vec()
            .into_iter()
            .map(|(awards_bucket, tally)| AwardBucketRow {
                awards_bucket,
                actor_ratio: tally.with_actor as f64 / tally.records as f64,
            })
            .collect();

        debug!(report = "award-buckets", rows = rows.len(), "generated report");
        Self { rows }
    }
}

impl TabularReport for AwardBucketReport {
    type Row = AwardBucketRow;

    fn kind(&self) -> ReportKind {
        ReportKind::AwardBuckets
    }

    fn rows(&self) -> &[AwardBucketRow] {
        &self.rows
    }

    fn cells(row: &AwardBucketRow) -> Vec<Cell> {
        vec![
            Cell::Text(row.awards_bucket.to_string()),
            Cell::Ratio(row.actor_ratio),
        ]
    }
}
