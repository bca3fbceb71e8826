//! Top-K selection over scanned company rows.
//!
//! The leaderboard is computed from a full scan, so the selection runs
//! client-side. Instead of sorting the whole scan and truncating, a
//! bounded min-heap of capacity `limit` keeps memory at O(limit) while
//! producing exactly the output a stable descending sort followed by
//! truncation would: ordered by count descending, and rows with equal
//! counts keep their scan order (first scanned ranks first). Scan-order
//! tie-breaking is part of this function's contract, not an accident of
//! the sort.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::domain::{CompanyRecord, RankedCompany};

struct Entry {
    count: i64,
    seq: usize,
    company_id: String,
    company_name: String,
}

// Ordering: an entry is "greater" when it outranks the other, meaning a
// higher count, or an equal count seen earlier in the scan.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Rank companies by boycott count descending and keep the top `limit`.
///
/// Rows without a boycott counter are excluded entirely, never ranked as
/// zero. Ranks are assigned 1..K contiguously, K = min(limit, valid rows).
pub fn rank_top_companies(records: Vec<CompanyRecord>, limit: usize) -> Vec<RankedCompany> {
    // limit is caller-controlled; never pre-allocate more than the scan
    // can fill.
    let capacity = limit.min(records.len()).saturating_add(1);
    let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::with_capacity(capacity);

    for (seq, record) in records.into_iter().enumerate() {
        let count = match record.boycott_count {
            Some(count) => count,
            None => continue,
        };

        heap.push(Reverse(Entry {
            count,
            seq,
            company_id: record.company_id,
            company_name: record.company_name,
        }));

        // The root is the current worst entry; evicting it on overflow
        // keeps the K best seen so far.
        if heap.len() > limit {
            heap.pop();
        }
    }

    let mut top: Vec<Entry> = heap.into_iter().map(|Reverse(entry)| entry).collect();
    top.sort_unstable_by(|a, b| b.cmp(a));

    top.into_iter()
        .enumerate()
        .map(|(i, entry)| RankedCompany {
            id: entry.company_id,
            name: entry.company_name,
            count: entry.count,
            rank: (i + 1) as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, count: Option<i64>) -> CompanyRecord {
        CompanyRecord {
            company_id: id.to_string(),
            company_name: name.to_string(),
            boycott_count: count,
        }
    }

    #[test]
    fn ranks_descending_with_contiguous_ranks() {
        let records = vec![
            record("c2", "Amazon", Some(15)),
            record("c1", "Apple", Some(25)),
            record("c3", "Shell", Some(40)),
        ];

        let ranked = rank_top_companies(records, 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for pair in ranked.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(ranked[0].id, "c3");
    }

    #[test]
    fn truncates_to_limit() {
        let records = vec![
            record("c1", "Apple", Some(25)),
            record("c2", "Amazon", Some(15)),
        ];

        let ranked = rank_top_companies(records, 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "c1");
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn limit_larger_than_dataset_returns_all() {
        let records = vec![
            record("c1", "Apple", Some(25)),
            record("c2", "Amazon", Some(15)),
        ];

        let ranked = rank_top_companies(records, 10);

        assert_eq!(ranked.len(), 2);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn rows_without_counter_are_excluded() {
        let records = vec![
            record("c1", "Apple", Some(25)),
            record("c2", "Unrated", None),
            record("c3", "Amazon", Some(15)),
        ];

        let ranked = rank_top_companies(records, 10);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.id != "c2"));
    }

    #[test]
    fn equal_counts_keep_scan_order() {
        let records = vec![
            record("c1", "First", Some(10)),
            record("c2", "Second", Some(10)),
            record("c3", "Third", Some(10)),
        ];

        let ranked = rank_top_companies(records, 3);

        assert_eq!(
            ranked.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["c1", "c2", "c3"]
        );
    }

    #[test]
    fn truncation_inside_tie_group_keeps_first_scanned() {
        let records = vec![
            record("c1", "First", Some(10)),
            record("c2", "Second", Some(10)),
            record("c3", "Top", Some(99)),
            record("c4", "Third", Some(10)),
        ];

        let ranked = rank_top_companies(records, 2);

        assert_eq!(
            ranked.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["c3", "c1"]
        );
    }

    #[test]
    fn empty_dataset_yields_empty_leaderboard() {
        assert!(rank_top_companies(Vec::new(), 5).is_empty());
    }

    #[test]
    fn matches_full_sort_then_truncate() {
        let records: Vec<CompanyRecord> = (0..50)
            .map(|i| record(&format!("c{i}"), &format!("Company {i}"), Some((i * 7) % 13)))
            .collect();

        let expected: Vec<(String, i64)> = {
            let mut valid: Vec<(usize, CompanyRecord)> =
                records.iter().cloned().enumerate().collect();
            valid.sort_by(|(sa, a), (sb, b)| {
                b.boycott_count
                    .cmp(&a.boycott_count)
                    .then_with(|| sa.cmp(sb))
            });
            valid
                .into_iter()
                .take(10)
                .map(|(_, r)| (r.company_id, r.boycott_count.unwrap()))
                .collect()
        };

        let ranked = rank_top_companies(records, 10);
        let actual: Vec<(String, i64)> =
            ranked.into_iter().map(|r| (r.id, r.count)).collect();

        assert_eq!(actual, expected);
    }
}
