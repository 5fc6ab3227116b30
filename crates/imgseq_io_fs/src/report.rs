//! Rename report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters for one `rename_copy` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportRename {
    /// Total entries listed in the input directory.
    pub cnt_scanned: u64,
    /// Entries that passed filters and received an index.
    pub cnt_matched: u64,
    /// Entries written to the output directory.
    pub cnt_copied: u64,
    /// Entries planned but not written (dry-run).
    pub cnt_skipped: u64,
}

impl ReportRename {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} matched={} copied={} skipped={}",
            self.cnt_scanned, self.cnt_matched, self.cnt_copied, self.cnt_skipped
        )
    }
}

impl fmt::Display for ReportRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[RENAME]"))
    }
}

/// Mutable accumulator for rename statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportRenameBuilder {
    cnt_scanned: u64,
    cnt_matched: u64,
    cnt_copied: u64,
    cnt_skipped: u64,
}

impl ReportRenameBuilder {
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub fn add_matched(&mut self, value: u64) {
        self.cnt_matched += value;
    }

    pub fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportRename {
        ReportRename {
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_copied: self.cnt_copied,
            cnt_skipped: self.cnt_skipped,
        }
    }
}
