//! Statistics for the quality filtering pass.

/// Counts tracked across the quality filtering and deduplication pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records entering the pass
    pub total_input: usize,
    /// Records dropped for a zero latitude or longitude
    pub zero_coordinate_dropped: usize,
    /// Records dropped for identical latitude and longitude
    pub mirrored_coordinate_dropped: usize,
    /// Records dropped as duplicates of an earlier record
    pub duplicates_dropped: usize,
    /// Records surviving the pass
    pub final_output: usize,
}

impl FilterStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records removed by the pass
    pub fn total_dropped(&self) -> usize {
        self.zero_coordinate_dropped + self.mirrored_coordinate_dropped + self.duplicates_dropped
    }

    /// Fraction of input records that survived, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.final_output as f64 / self.total_input as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Quality filtering: {} -> {} records ({:.1}% retained) | \
             zero coords: {} | mirrored coords: {} | duplicates: {}",
            self.total_input,
            self.final_output,
            self.retention_rate(),
            self.zero_coordinate_dropped,
            self.mirrored_coordinate_dropped,
            self.duplicates_dropped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_report_full_retention() {
        let stats = FilterStats::new();
        assert_eq!(stats.retention_rate(), 100.0);
        assert_eq!(stats.total_dropped(), 0);
    }

    #[test]
    fn drop_counts_accumulate() {
        let stats = FilterStats {
            total_input: 10,
            zero_coordinate_dropped: 2,
            mirrored_coordinate_dropped: 1,
            duplicates_dropped: 3,
            final_output: 4,
        };
        assert_eq!(stats.total_dropped(), 6);
        assert_eq!(stats.retention_rate(), 40.0);
        assert!(stats.summary().contains("10 -> 4"));
    }
}
