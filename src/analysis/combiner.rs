/// Positional sliding-window member selection. Combination `i` starts at
/// index `i` and wraps around the working set; window sizes cycle through
/// the configured range. Clothing-type compatibility is intentionally not
/// considered, matching the behavior this selector models.
#[derive(Debug, Clone)]
pub struct Combiner {
    max_windows: usize,
    min_items: usize,
    max_items: usize,
}

impl Default for Combiner {
    fn default() -> Self {
        Self {
            max_windows: 6,
            min_items: 2,
            max_items: 4,
        }
    }
}

impl Combiner {
    pub fn new(max_windows: usize, min_items: usize, max_items: usize) -> Self {
        let min_items = min_items.max(2);
        Self {
            max_windows: max_windows.max(1),
            min_items,
            max_items: max_items.max(min_items),
        }
    }

    /// Index windows into a working set of `item_count` items. Empty when
    /// the set is smaller than the minimum window.
    pub fn select_windows(&self, item_count: usize) -> Vec<Vec<usize>> {
        if item_count < self.min_items {
            return Vec::new();
        }

        let window_count = item_count.min(self.max_windows);
        let size_cycle = self.max_items - self.min_items + 1;

        (0..window_count)
            .map(|i| {
                // Cap at the set size so an item never repeats in a window.
                let size = (self.min_items + i % size_cycle).min(item_count);
                (0..size).map(|j| (i + j) % item_count).collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_items_yield_no_windows() {
        let combiner = Combiner::default();
        assert!(combiner.select_windows(0).is_empty());
        assert!(combiner.select_windows(1).is_empty());
    }

    #[test]
    fn two_items_give_pair_windows() {
        let combiner = Combiner::default();
        let windows = combiner.select_windows(2);
        assert_eq!(windows.len(), 2);
        for window in &windows {
            assert_eq!(window.len(), 2);
        }
        assert_eq!(windows[0], vec![0, 1]);
        assert_eq!(windows[1], vec![1, 0]);
    }

    #[test]
    fn window_sizes_cycle_between_bounds() {
        let combiner = Combiner::default();
        let windows = combiner.select_windows(5);
        assert_eq!(windows.len(), 5);
        assert_eq!(windows[0].len(), 2);
        assert_eq!(windows[1].len(), 3);
        assert_eq!(windows[2].len(), 4);
        assert_eq!(windows[3].len(), 2);
    }

    #[test]
    fn windows_wrap_and_never_repeat_an_item() {
        let combiner = Combiner::default();
        for item_count in 2..8 {
            for window in combiner.select_windows(item_count) {
                let mut seen = window.clone();
                seen.sort_unstable();
                seen.dedup();
                assert_eq!(seen.len(), window.len());
                assert!(window.iter().all(|&i| i < item_count));
            }
        }
    }

    #[test]
    fn window_count_is_capped() {
        let combiner = Combiner::new(3, 2, 4);
        assert_eq!(combiner.select_windows(10).len(), 3);
    }
}
