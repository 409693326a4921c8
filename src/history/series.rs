//! Year-by-year h-index reconstruction from a researcher's works.
//!
//! # Citation count approximation
//!
//! The works provider reports one citation count per work: the total as of
//! fetch time. There are no per-year citation snapshots, so a work admitted
//! into an early window year carries its present-day count. The series is
//! therefore an approximation of the true historical trajectory, biased
//! upward for early years. This is a stated assumption of the dataset, not
//! something to correct for downstream.

use tracing::instrument;

use crate::provider::Work;

use super::{WINDOW_LEN, window_years};

/// Computes the h-index for each window year from a researcher's works.
///
/// A work qualifies for year Y when it has a publication year and that year
/// is ≤ Y; works without a publication year never qualify. The h-index for Y
/// is the largest `h` such that at least `h` qualifying works have ≥ `h`
/// citations. All window years are produced even when early years have no
/// qualifying works (their value is 0).
///
/// Rather than re-sorting the qualifying subset for every year, works are
/// sorted once by publication year and admitted incrementally. A frequency
/// table of citation counts (capped at the total work count, since h can
/// never exceed it) is maintained across years, and h is re-derived per year
/// by scanning the cumulative tail from high counts down until at least `h`
/// works have ≥ `h` citations. Equivalent to a fresh sort at each year.
///
/// The result depends only on the (year, citations) multiset, so
/// recomputation over the same snapshot is deterministic.
#[must_use]
#[instrument(skip(works), fields(works = works.len()))]
pub fn h_index_series(works: &[Work]) -> [u32; WINDOW_LEN] {
    let total = works.len();

    // Admission order: publication year ascending. Undated works are dropped
    // up front since no window year can admit them.
    let mut dated: Vec<(i32, u32)> = works
        .iter()
        .filter_map(|work| work.publication_year.map(|year| (year, work.cited_by_count)))
        .collect();
    dated.sort_unstable_by_key(|&(year, _)| year);

    // freq[c] = admitted works whose citation count (capped at total) is c.
    // Capping keeps the table at total+1 entries without affecting h, which
    // is bounded by the number of works.
    let mut freq = vec![0u32; total + 1];
    let mut next = 0;

    let mut series = [0u32; WINDOW_LEN];
    for (slot, year) in window_years().enumerate() {
        while next < dated.len() && dated[next].0 <= year {
            let capped = (dated[next].1 as usize).min(total);
            freq[capped] += 1;
            next += 1;
        }
        series[slot] = h_from_freq(&freq);
    }

    series
}

/// Derives the h-index from a citation-count frequency table.
///
/// Scans from the highest count down, accumulating the number of works with
/// at least `c` citations; the first `c` where that tail reaches `c` is h.
fn h_from_freq(freq: &[u32]) -> u32 {
    let mut tail: usize = 0;
    for c in (1..freq.len()).rev() {
        tail += freq[c] as usize;
        if tail >= c {
            #[allow(clippy::cast_possible_truncation)]
            return c as u32;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{WINDOW_END, WINDOW_START};

    fn work(year: i32, citations: u32) -> Work {
        Work {
            publication_year: Some(year),
            cited_by_count: citations,
        }
    }

    fn undated(citations: u32) -> Work {
        Work {
            publication_year: None,
            cited_by_count: citations,
        }
    }

    /// Reference implementation: fresh sort of the qualifying subset per year.
    fn naive_h_at_year(works: &[Work], target_year: i32) -> u32 {
        let mut citations: Vec<u32> = works
            .iter()
            .filter(|w| w.publication_year.is_some_and(|y| y <= target_year))
            .map(|w| w.cited_by_count)
            .collect();
        citations.sort_unstable_by(|a, b| b.cmp(a));

        let mut h = 0;
        for (i, count) in citations.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let rank = (i + 1) as u32;
            if *count >= rank {
                h = rank;
            } else {
                break;
            }
        }
        h
    }

    // ==================== Edge Cases ====================

    #[test]
    fn test_series_zero_works_is_all_zeros() {
        let series = h_index_series(&[]);
        assert_eq!(series, [0u32; WINDOW_LEN]);
    }

    #[test]
    fn test_series_undated_works_never_qualify() {
        let works = vec![undated(100), undated(50)];
        let series = h_index_series(&works);
        assert_eq!(series, [0u32; WINDOW_LEN]);
    }

    #[test]
    fn test_series_single_year_cohort() {
        // Two works with 5 citations each, one with 0: h is 2 from 2016 on
        let works = vec![work(2016, 5), work(2016, 5), work(2016, 0)];
        let series = h_index_series(&works);

        assert_eq!(series[0], 0, "2015 precedes all publications");
        for (slot, value) in series.iter().enumerate().skip(1) {
            assert_eq!(*value, 2, "year slot {slot} should be 2");
        }
    }

    #[test]
    fn test_series_works_before_window_count_from_first_year() {
        let works = vec![work(2003, 9), work(2010, 7), work(2014, 4)];
        let series = h_index_series(&works);
        assert_eq!(series[0], 3, "all three works qualify at the window start");
    }

    #[test]
    fn test_series_works_after_window_end_never_admitted() {
        let works = vec![work(2026, 500)];
        let series = h_index_series(&works);
        assert_eq!(series, [0u32; WINDOW_LEN]);
    }

    #[test]
    fn test_series_citations_above_work_count_capped_without_effect() {
        // h is bounded by the number of works regardless of citation totals
        let works = vec![work(2015, 100_000), work(2015, 90_000)];
        let series = h_index_series(&works);
        assert_eq!(series[0], 2);
        assert_eq!(series[WINDOW_LEN - 1], 2);
    }

    // ==================== Properties ====================

    #[test]
    fn test_series_monotone_non_decreasing() {
        let works = vec![
            work(2012, 30),
            work(2015, 12),
            work(2016, 0),
            work(2017, 8),
            work(2018, 8),
            work(2019, 3),
            work(2020, 25),
            work(2021, 2),
            work(2022, 6),
            work(2023, 1),
            work(2024, 4),
        ];
        let series = h_index_series(&works);
        assert!(
            series.windows(2).all(|pair| pair[0] <= pair[1]),
            "series must be non-decreasing: {series:?}"
        );
    }

    #[test]
    fn test_series_matches_fresh_sort_per_year() {
        // Mixed publication years, ties, zeros, undated entries
        let works = vec![
            work(2009, 44),
            work(2013, 17),
            work(2015, 17),
            work(2015, 2),
            work(2016, 0),
            work(2016, 9),
            work(2017, 9),
            work(2018, 1),
            work(2018, 30),
            work(2019, 5),
            work(2020, 5),
            work(2020, 5),
            work(2021, 0),
            work(2022, 11),
            work(2023, 3),
            work(2024, 7),
            work(2025, 2),
            undated(60),
        ];

        let series = h_index_series(&works);
        for (slot, year) in (WINDOW_START..=WINDOW_END).enumerate() {
            assert_eq!(
                series[slot],
                naive_h_at_year(&works, year),
                "mismatch at year {year}"
            );
        }
    }

    #[test]
    fn test_series_deterministic_under_input_order() {
        let mut works = vec![
            work(2015, 3),
            work(2016, 10),
            work(2017, 1),
            work(2018, 7),
            work(2019, 7),
        ];
        let forward = h_index_series(&works);
        works.reverse();
        let reversed = h_index_series(&works);
        assert_eq!(forward, reversed);
    }
}
