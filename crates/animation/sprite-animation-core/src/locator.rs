//! Frame-group lookup over a cumulative boundary table.
//!
//! Group `g` owns every wrapped frame index `w` with
//! `table[g - 1] <= w < table[g]` (`table[-1] = 0`). Lookups binary-search the
//! table for `w + 1`; a one-slot cache remembers the last group's range so the
//! common case of small forward steps during playback is O(1).

use std::cell::Cell;
use std::sync::Arc;

/// Half-open range `[low, high)` of wrapped frame indices owned by `group`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CachedGroup {
    pub low: u32,
    pub high: u32,
    pub group: usize,
}

impl CachedGroup {
    #[inline]
    fn contains(&self, wrapped: u32) -> bool {
        self.low <= wrapped && wrapped < self.high
    }
}

#[derive(Debug, Clone)]
pub struct FrameGroupLocator {
    table: Arc<[u32]>,
    cache: Cell<Option<CachedGroup>>,
    cache_enabled: bool,
}

impl FrameGroupLocator {
    /// Validate and wrap a boundary table. Entries must be `>= 1` and strictly ascending;
    /// the error names the first violation.
    pub fn new(table: Arc<[u32]>, cache_enabled: bool) -> Result<Self, String> {
        validate_table(&table)?;
        Ok(Self {
            table,
            cache: Cell::new(None),
            cache_enabled,
        })
    }

    pub fn group_count(&self) -> usize {
        self.table.len()
    }

    pub fn total_frames(&self) -> u32 {
        self.table.last().copied().unwrap_or(0)
    }

    pub fn table(&self) -> &[u32] {
        &self.table
    }

    /// Range currently held by the cache, if any.
    pub fn cached(&self) -> Option<CachedGroup> {
        self.cache.get()
    }

    pub fn clear_cache(&self) {
        self.cache.set(None);
    }

    /// Group owning `wrapped`, served from the cache when the range still matches.
    ///
    /// `wrapped` is expected below [`Self::total_frames`]; larger values
    /// resolve to `group_count()`.
    pub fn locate(&self, wrapped: u32) -> usize {
        if let Some(hit) = self.cache.get() {
            if hit.contains(wrapped) {
                return hit.group;
            }
        }
        let group = self.locate_uncached(wrapped);
        log::trace!("frame group cache miss: frame {wrapped} -> group {group}");
        if self.cache_enabled {
            if let Some(&high) = self.table.get(group) {
                let low = if group == 0 { 0 } else { self.table[group - 1] };
                self.cache.set(Some(CachedGroup { low, high, group }));
            }
        }
        group
    }

    /// Binary search only; the cache is neither read nor written.
    pub fn locate_uncached(&self, wrapped: u32) -> usize {
        let key = wrapped.saturating_add(1);
        match self.table.binary_search(&key) {
            Ok(exact) => exact,
            Err(insertion) => insertion,
        }
    }
}

fn validate_table(table: &[u32]) -> Result<(), String> {
    if let Some(&first) = table.first() {
        if first == 0 {
            return Err("frame info 0 spans no frames".into());
        }
    }
    for (i, pair) in table.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(format!(
                "frame info boundaries must be strictly ascending (entry {} = {} after {})",
                i + 1,
                pair[1],
                pair[0]
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(table: &[u32]) -> FrameGroupLocator {
        FrameGroupLocator::new(Arc::from(table), true).expect("valid table")
    }

    #[test]
    fn groups_own_their_ranges() {
        let loc = locator(&[3, 7, 10]);
        for (wrapped, group) in [(0, 0), (2, 0), (3, 1), (6, 1), (7, 2), (9, 2)] {
            assert_eq!(loc.locate(wrapped), group, "wrapped={wrapped}");
        }
    }

    #[test]
    fn cache_holds_last_range() {
        let loc = locator(&[3, 7, 10]);
        assert_eq!(loc.cached(), None);
        loc.locate(4);
        assert_eq!(
            loc.cached(),
            Some(CachedGroup {
                low: 3,
                high: 7,
                group: 1
            })
        );
        loc.locate(0);
        assert_eq!(
            loc.cached(),
            Some(CachedGroup {
                low: 0,
                high: 3,
                group: 0
            })
        );
    }

    #[test]
    fn fast_path_agrees_with_search() {
        let loc = locator(&[2, 3, 8, 9, 15]);
        for wrapped in (0..15).chain((0..15).rev()).chain([14, 0, 7, 2, 8, 3]) {
            let cached_before = loc.cached();
            let got = loc.locate(wrapped);
            assert_eq!(got, loc.locate_uncached(wrapped), "wrapped={wrapped}");
            if let Some(hit) = cached_before {
                if hit.contains(wrapped) {
                    assert_eq!(got, hit.group);
                    assert_eq!(loc.cached(), cached_before);
                }
            }
        }
    }

    #[test]
    fn uncached_lookup_leaves_cache_alone() {
        let loc = locator(&[3, 7, 10]);
        loc.locate(8);
        let before = loc.cached();
        assert_eq!(loc.locate_uncached(1), 0);
        assert_eq!(loc.cached(), before);
    }

    #[test]
    fn disabled_cache_stays_empty() {
        let loc = FrameGroupLocator::new(Arc::from(&[3u32, 7, 10][..]), false).unwrap();
        assert_eq!(loc.locate(5), 1);
        assert_eq!(loc.cached(), None);
    }

    #[test]
    fn rejects_non_ascending_tables() {
        assert!(FrameGroupLocator::new(Arc::from(&[3u32, 3][..]), true).is_err());
        assert!(FrameGroupLocator::new(Arc::from(&[5u32, 2][..]), true).is_err());
        assert!(FrameGroupLocator::new(Arc::from(&[0u32, 2][..]), true).is_err());
    }

    #[test]
    fn rejection_reason_is_plain_text() {
        let err = FrameGroupLocator::new(Arc::from(&[0u32, 2][..]), true).unwrap_err();
        assert_eq!(err, "frame info 0 spans no frames");
    }

    #[test]
    fn empty_table_is_valid() {
        let loc = locator(&[]);
        assert_eq!(loc.group_count(), 0);
        assert_eq!(loc.total_frames(), 0);
    }
}
