//! Per-run reconciliation counters

use crate::models::Status;

/// Tally of one run's reconciliation outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub new: usize,
    pub updated: usize,
    pub par: usize,
    pub unchanged: usize,
    /// Listings dropped at ingestion (empty or repeated title)
    pub skipped: usize,
    /// Entries flagged by the stock pass
    pub in_stock: usize,
    /// Stock titles with no catalog entry
    pub unknown_stock: usize,
}

impl RunStatistics {
    /// Count one reconciled listing
    pub fn record(&mut self, status: Status) {
        match status {
            Status::New => self.new += 1,
            Status::Updated => self.updated += 1,
            Status::Par => self.par += 1,
            Status::Unchanged => self.unchanged += 1,
        }
    }

    /// Number of reconciled listings
    pub fn total(&self) -> usize {
        self.new + self.updated + self.par + self.unchanged
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::New => self.new,
            Status::Updated => self.updated,
            Status::Par => self.par,
            Status::Unchanged => self.unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_exactly_one_counter() {
        let mut stats = RunStatistics::default();
        stats.record(Status::New);
        stats.record(Status::Par);
        stats.record(Status::Par);

        assert_eq!(stats.count(Status::New), 1);
        assert_eq!(stats.count(Status::Par), 2);
        assert_eq!(stats.count(Status::Updated), 0);
        assert_eq!(stats.count(Status::Unchanged), 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn diagnostics_do_not_count_toward_total() {
        let stats = RunStatistics {
            skipped: 4,
            in_stock: 2,
            unknown_stock: 1,
            ..Default::default()
        };
        assert_eq!(stats.total(), 0);
    }
}
